use chrono::{DateTime, Local, TimeZone};
use colored::Colorize;
use std::fmt::Display;
use tracing::info;

/// Prints `message` with a dimmed `[HH:MM:SS]` prefix and records it as a tracing event.
pub fn log(message: impl Display) {
    let line = format_log_line(&Local::now(), &message);
    info!(target: "ffterm::log", "{}", message);
    println!("{}", line);
}

pub(crate) fn format_log_line<Tz>(at: &DateTime<Tz>, message: &dyn Display) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let stamp = format!("[{}]", at.format("%H:%M:%S"));
    format!("{} {}", stamp.dimmed(), message)
}
