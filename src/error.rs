//! Defines the crate's error type `FftermError` and a convenience `Result` alias.
//!
//! Uses the `thiserror` crate for ergonomic error definition and provides `From`
//! implementations to convert common external errors into `FftermError` variants.
//! Errors that do not implement `Clone` are wrapped in `Arc` so `FftermError` stays cloneable.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// The error enumeration for every fallible helper in the crate.
#[derive(Error, Debug, Clone)]
pub enum FftermError {
    /// The command line was empty after splitting.
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// The child process could not be created (missing executable, permission denied, ...).
    #[error("Failed to start command '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: Arc<std::io::Error>,
    },

    /// Strict mode only: the child exited with a non-zero status.
    ///
    /// `code` is `None` when the child was terminated by a signal.
    #[error("Command failed with code {}: {}", display_code(.code), .stderr)]
    CommandFailed { code: Option<i32>, stderr: String },

    /// The configured deadline elapsed and the child was killed.
    #[error("Command '{program}' timed out after {after:?}")]
    TimedOut { program: String, after: Duration },

    /// The cancellation token fired and the child was killed.
    #[error("Command '{program}' was cancelled")]
    Cancelled { program: String },

    /// Error related to standard I/O operations.
    #[error("I/O Error: {0}")]
    Io(Arc<std::io::Error>),

    /// Error originating from user interaction prompts (`dialoguer`).
    #[error("Prompt Error: {0}")]
    Prompt(Arc<dialoguer::Error>),

    /// Error related to progress bar style templating (`indicatif`).
    #[error("Progress Style Template Error: {0}")]
    Template(Arc<indicatif::style::TemplateError>),

    /// Unknown color or attribute name passed to the styling helpers.
    #[error("Unknown style '{0}'")]
    Style(String),

    /// Error while reading table data from JSON.
    #[error("JSON Parsing Error: {0}")]
    Json(Arc<serde_json::Error>),

    /// An environment variable held a value that could not be parsed.
    #[error("Config Error: {0}")]
    Config(String),
}

/// A specialized `Result` type using the crate's `FftermError`.
pub type Result<T> = std::result::Result<T, FftermError>;

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}

impl FftermError {
    /// Exit code carried by a strict-mode failure, if any.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            FftermError::CommandFailed { code, .. } => *code,
            _ => None,
        }
    }
}

// --- From implementations ---

impl From<std::io::Error> for FftermError {
    fn from(err: std::io::Error) -> Self {
        FftermError::Io(Arc::new(err))
    }
}

impl From<dialoguer::Error> for FftermError {
    fn from(err: dialoguer::Error) -> Self {
        FftermError::Prompt(Arc::new(err))
    }
}

impl From<indicatif::style::TemplateError> for FftermError {
    fn from(err: indicatif::style::TemplateError) -> Self {
        FftermError::Template(Arc::new(err))
    }
}

impl From<serde_json::Error> for FftermError {
    fn from(err: serde_json::Error) -> Self {
        FftermError::Json(Arc::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_message_includes_code_and_stderr() {
        let err = FftermError::CommandFailed {
            code: Some(2),
            stderr: "no such file".to_string(),
        };
        assert_eq!(err.to_string(), "Command failed with code 2: no such file");
        assert_eq!(err.exit_code(), Some(2));
    }

    #[test]
    fn signal_termination_has_no_code() {
        let err = FftermError::CommandFailed {
            code: None,
            stderr: String::new(),
        };
        assert!(err.to_string().contains("signal"));
        assert_eq!(err.exit_code(), None);
    }

    #[test]
    fn spawn_error_wraps_os_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err = FftermError::Spawn {
            program: "nope".to_string(),
            source: Arc::new(io),
        };
        assert!(err.to_string().starts_with("Failed to start command 'nope'"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
