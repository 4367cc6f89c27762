//! Execution requests: what to run and how.

use crate::error::{FftermError, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Where the child's stdin comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StdinMode {
    /// Share the parent's stdin.
    #[default]
    Inherit,
    /// Connect stdin to the null device (immediate EOF).
    Null,
}

/// Options controlling a single command execution.
///
/// Output is always captured. `verbose` additionally tees each chunk to the
/// parent's terminal as it arrives; `throw_error` selects strict failure on
/// non-zero exit instead of the lenient default.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub verbose: bool,
    pub throw_error: bool,
    pub cwd: Option<PathBuf>,
    pub env: HashMap<String, String>,
    pub env_clear: bool,
    pub stdin: StdinMode,
    pub timeout: Option<Duration>,
    pub cancel: Option<CancellationToken>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            verbose: true,
            throw_error: false,
            cwd: None,
            env: HashMap::new(),
            env_clear: false,
            stdin: StdinMode::Inherit,
            timeout: None,
            cancel: None,
        }
    }
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn throw_error(mut self, throw_error: bool) -> Self {
        self.throw_error = throw_error;
        self
    }

    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Add one environment variable on top of the inherited environment.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Start the child with an empty environment (plus anything set via [`RunOptions::env`]).
    pub fn env_clear(mut self) -> Self {
        self.env_clear = true;
        self
    }

    pub fn stdin(mut self, stdin: StdinMode) -> Self {
        self.stdin = stdin;
        self
    }

    /// Kill the child and fail with `TimedOut` if it is still running after `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Kill the child and fail with `Cancelled` once `token` is cancelled.
    pub fn cancel_on(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

/// A program, its ordered arguments, and the options to run it with.
#[derive(Debug, Clone)]
pub struct ExecRequest {
    pub program: String,
    pub args: Vec<String>,
    pub options: RunOptions,
}

impl ExecRequest {
    /// Creates a request for `program` with no arguments and default options.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            options: RunOptions::default(),
        }
    }

    /// Splits a command line on whitespace: the first token is the program,
    /// the rest are arguments.
    ///
    /// No quoting or escaping is understood, so an argument containing a space
    /// cannot be expressed this way. Build the request with [`ExecRequest::new`]
    /// and [`ExecRequest::args`] when that matters.
    ///
    /// # Errors
    ///
    /// Returns `FftermError::InvalidCommand` if `line` holds no tokens.
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let program = tokens
            .next()
            .ok_or_else(|| FftermError::InvalidCommand("empty command line".to_string()))?;
        Ok(Self::new(program).args(tokens))
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// The request rendered back as a single line, for log messages.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("echo hello", "echo", &["hello"])]
    #[case("ls", "ls", &[])]
    #[case("  git   status  --short ", "git", &["status", "--short"])]
    #[case("printf a\tb", "printf", &["a", "b"])]
    fn parse_splits_on_whitespace(
        #[case] line: &str,
        #[case] program: &str,
        #[case] args: &[&str],
    ) {
        let request = ExecRequest::parse(line).unwrap();
        assert_eq!(request.program, program);
        assert_eq!(request.args, args);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn parse_rejects_empty_lines(#[case] line: &str) {
        match ExecRequest::parse(line) {
            Err(FftermError::InvalidCommand(_)) => {},
            other => panic!("Expected InvalidCommand, got {:?}", other),
        }
    }

    #[test]
    fn structured_args_keep_embedded_spaces() {
        let request = ExecRequest::new("touch").arg("my file.txt");
        assert_eq!(request.args, vec!["my file.txt".to_string()]);
        assert_eq!(request.display(), "touch my file.txt");
    }

    #[test]
    fn default_options_are_verbose_and_lenient() {
        let options = RunOptions::default();
        assert!(options.verbose);
        assert!(!options.throw_error);
        assert!(options.timeout.is_none());
        assert_eq!(options.stdin, StdinMode::Inherit);
    }

    #[test]
    fn builder_sets_passthrough_fields() {
        let options = RunOptions::new()
            .verbose(false)
            .throw_error(true)
            .cwd("/tmp")
            .env("KEY", "value")
            .env_clear()
            .stdin(StdinMode::Null)
            .timeout(Duration::from_secs(3));
        assert!(!options.verbose);
        assert!(options.throw_error);
        assert_eq!(options.cwd, Some(PathBuf::from("/tmp")));
        assert_eq!(options.env.get("KEY").map(String::as_str), Some("value"));
        assert!(options.env_clear);
        assert_eq!(options.stdin, StdinMode::Null);
        assert_eq!(options.timeout, Some(Duration::from_secs(3)));
    }
}
