//! Explicit defaults for the helpers, optionally loaded from the environment.
//!
//! Nothing in the crate reads this implicitly: build a `Config` once and
//! derive per-call options from it.

use crate::error::{FftermError, Result};
use crate::exec::RunOptions;
use crate::ui::{self, BoxOptions, LINE_CHAR};
use std::env::{self, VarError};
use tracing::debug;

pub const ENV_VERBOSE: &str = "FFTERM_VERBOSE";
pub const ENV_THROW_ERROR: &str = "FFTERM_THROW_ERROR";
pub const ENV_BANNER_COLOR: &str = "FFTERM_BANNER_COLOR";
pub const ENV_LINE_CHAR: &str = "FFTERM_LINE_CHAR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tee child output to the terminal while capturing it.
    pub verbose: bool,
    /// Fail on non-zero exit instead of logging stderr.
    pub throw_error: bool,
    pub banner_color: String,
    pub line_char: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: true,
            throw_error: false,
            banner_color: "green".to_string(),
            line_char: LINE_CHAR.to_string(),
        }
    }
}

impl Config {
    /// Loads `.env` if present, then overrides the defaults with any
    /// `FFTERM_*` variables that are set.
    ///
    /// # Errors
    ///
    /// Returns `FftermError::Config` if a boolean variable is not one of
    /// `1/0`, `true/false`, `yes/no`, `on/off`, or a variable is not valid Unicode.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let mut config = Self::default();
        if let Some(verbose) = read_bool(ENV_VERBOSE)? {
            config.verbose = verbose;
        }
        if let Some(throw_error) = read_bool(ENV_THROW_ERROR)? {
            config.throw_error = throw_error;
        }
        if let Some(color) = read_var(ENV_BANNER_COLOR)? {
            config.banner_color = color;
        }
        if let Some(line_char) = read_var(ENV_LINE_CHAR)? {
            config.line_char = line_char;
        }
        debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Run options pre-filled with this config's `verbose` and `throw_error`.
    pub fn run_options(&self) -> RunOptions {
        RunOptions::new()
            .verbose(self.verbose)
            .throw_error(self.throw_error)
    }

    /// Banner options with this config's border color.
    pub fn banner_options(&self) -> BoxOptions {
        BoxOptions::banner().border_color(self.banner_color.clone())
    }

    /// Prints a full-width separator made of this config's `line_char`.
    pub fn line(&self) {
        ui::line(Some(&self.line_char));
    }

    /// The separator [`Config::line`] would print on a terminal `width` columns wide.
    pub fn separator(&self, width: u16) -> String {
        ui::line_of(&self.line_char, width)
    }
}

fn read_var(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(FftermError::Config(format!("{}: {}", key, e))),
    }
}

fn read_bool(key: &str) -> Result<Option<bool>> {
    let Some(value) = read_var(key)? else {
        return Ok(None);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(FftermError::Config(format!(
            "{} must be a boolean, got '{}'",
            key, value
        ))),
    }
}
