//! Spinners and progress bars (`indicatif`).

use crate::error::{FftermError, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

const SPINNER_FRAMES: [&str; 11] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "];
const TICK: Duration = Duration::from_millis(80);

/// A running spinner labelled `label`. Stop it with `finish_with_message` or `finish_and_clear`.
pub fn spinner(label: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {wide_msg}")?
            .tick_strings(&SPINNER_FRAMES),
    );
    pb.set_message(label.to_string());
    pb.enable_steady_tick(TICK);
    Ok(pb)
}

/// A progress bar counting up to `total`; advance it with `inc(n)`.
pub fn progress_bar(label: &str, total: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{prefix:.bold} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("█▉▊▋▌▍▎▏ "),
    );
    pb.set_prefix(label.to_string());
    Ok(pb)
}

/// Awaits `future` behind a spinner, then leaves a ✔ or ✖ line behind.
pub async fn spinner_while<F, T, E>(label: &str, future: F) -> std::result::Result<T, E>
where
    F: Future<Output = std::result::Result<T, E>>,
    E: From<FftermError> + Display,
{
    let pb = spinner(label)?;
    let result = future.await;
    match result {
        Ok(_) => pb.finish_with_message(format!("{} {}", "✔".green(), label)),
        Err(ref e) => pb.abandon_with_message(format!("{} {}: {}", "✖".red(), label, e)),
    }
    result
}
