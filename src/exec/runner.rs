//! Spawns a child process, captures its output and applies the error policy.
//!
//! stdout and stderr are always piped and drained by two reader tasks into
//! separate buffers. In verbose mode each chunk is also written to the
//! parent's matching stream as it arrives.

use crate::error::{FftermError, Result};
use crate::exec::request::{ExecRequest, RunOptions, StdinMode};
use std::io::{ErrorKind, Write};
use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

const READ_CHUNK: usize = 8_192;

/// Everything a finished child produced, without any error policy applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, or `None` when the child was terminated by a signal.
    pub code: Option<i32>,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl ExecRequest {
    /// Runs the request and resolves with the captured stdout.
    ///
    /// On a non-zero exit the outcome depends on `options.throw_error`:
    /// strict mode fails with `CommandFailed`, lenient mode writes the
    /// captured stderr to the diagnostic stream and still returns stdout.
    ///
    /// # Errors
    ///
    /// `Spawn` if the process cannot be started, `TimedOut` / `Cancelled` if
    /// it was killed, `CommandFailed` in strict mode.
    pub async fn run(self) -> Result<String> {
        let throw_error = self.options.throw_error;
        let output = self.run_detailed().await?;
        settle(output, throw_error, &mut std::io::stderr())
    }

    /// Runs the request and returns stdout, stderr and the exit code as-is.
    ///
    /// Unlike [`ExecRequest::run`], a non-zero exit is not an error here, so
    /// callers can tell "succeeded with no output" from "failed silently".
    pub async fn run_detailed(self) -> Result<RunOutput> {
        let label = self.display();
        let options = &self.options;

        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(ref cwd) = options.cwd {
            command.current_dir(cwd);
        }
        if options.env_clear {
            command.env_clear();
        }
        command.envs(&options.env);
        command.stdin(match options.stdin {
            StdinMode::Inherit => Stdio::inherit(),
            StdinMode::Null => Stdio::null(),
        });
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());
        command.kill_on_drop(true);

        let mut child = command.spawn().map_err(|e| {
            error!("Failed to start '{}': {}", label, e);
            FftermError::Spawn {
                program: self.program.clone(),
                source: Arc::new(e),
            }
        })?;
        debug!(pid = child.id(), "Spawned '{}'", label);

        let tee = options.verbose;
        let mut stdout_task = tokio::spawn(drain(child.stdout.take(), tee.then(tokio::io::stdout)));
        let mut stderr_task = tokio::spawn(drain(child.stderr.take(), tee.then(tokio::io::stderr)));

        let timeout = options.timeout;
        let deadline = async move {
            match timeout {
                Some(limit) => tokio::time::sleep(limit).await,
                None => std::future::pending::<()>().await,
            }
        };
        let cancel = options.cancel.clone().unwrap_or_default();

        // The run is over once the child has exited and both pipes hit EOF.
        // Grandchildren can keep the pipes open, so the deadline covers both.
        let finished = async {
            let status = child.wait().await?;
            let stdout = join_reader(&mut stdout_task).await?;
            let stderr = join_reader(&mut stderr_task).await?;
            Ok::<_, FftermError>((status, stdout, stderr))
        };

        let outcome = tokio::select! {
            result = finished => Outcome::Finished(result),
            _ = deadline => Outcome::TimedOut,
            _ = cancel.cancelled() => Outcome::Cancelled,
        };

        let (status, stdout, stderr) = match outcome {
            Outcome::Finished(Ok(finished)) => finished,
            Outcome::Finished(Err(e)) => {
                abandon(&mut child, &stdout_task, &stderr_task).await;
                return Err(e);
            },
            Outcome::TimedOut => {
                let after = timeout.unwrap_or(Duration::ZERO);
                warn!("'{}' timed out after {:?}, killing it", label, after);
                abandon(&mut child, &stdout_task, &stderr_task).await;
                return Err(FftermError::TimedOut {
                    program: self.program,
                    after,
                });
            },
            Outcome::Cancelled => {
                warn!("'{}' cancelled, killing it", label);
                abandon(&mut child, &stdout_task, &stderr_task).await;
                return Err(FftermError::Cancelled {
                    program: self.program,
                });
            },
        };
        debug!(code = ?status.code(), "'{}' exited", label);

        Ok(RunOutput {
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
            code: status.code(),
        })
    }
}

/// Runs a whitespace-separated command line; see [`ExecRequest::parse`] for
/// the splitting rules and [`ExecRequest::run`] for the error policy.
pub async fn run(command: &str, options: RunOptions) -> Result<String> {
    ExecRequest::parse(command)?.options(options).run().await
}

enum Outcome {
    Finished(Result<(ExitStatus, Vec<u8>, Vec<u8>)>),
    TimedOut,
    Cancelled,
}

type ReaderTask = JoinHandle<std::io::Result<Vec<u8>>>;

/// Reads `reader` to EOF, keeping every byte in arrival order. Each chunk is
/// also written to `tee` as it arrives; tee write failures never abort capture.
async fn drain<R, W>(reader: Option<R>, mut tee: Option<W>) -> std::io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some(mut reader) = reader else {
        return Ok(Vec::new());
    };
    let mut captured = Vec::new();
    let mut buf = vec![0u8; READ_CHUNK];
    loop {
        match reader.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => {
                if let Some(ref mut out) = tee {
                    let _ = out.write_all(&buf[..n]).await;
                    let _ = out.flush().await;
                }
                captured.extend_from_slice(&buf[..n]);
            },
            Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(captured)
}

async fn join_reader(task: &mut ReaderTask) -> Result<Vec<u8>> {
    match task.await {
        Ok(bytes) => Ok(bytes?),
        Err(e) => Err(std::io::Error::other(e).into()),
    }
}

async fn abandon(
    child: &mut tokio::process::Child,
    stdout_task: &ReaderTask,
    stderr_task: &ReaderTask,
) {
    // Fails harmlessly when only a grandchild is left holding the pipes.
    if let Err(e) = child.kill().await {
        debug!("Kill after abandoning run: {}", e);
    }
    stdout_task.abort();
    stderr_task.abort();
}

/// Applies the error policy to a finished run.
///
/// Lenient failures write the captured stderr to `diagnostics` so it is
/// never silently dropped.
pub(crate) fn settle(
    output: RunOutput,
    throw_error: bool,
    diagnostics: &mut dyn Write,
) -> Result<String> {
    if output.success() {
        return Ok(output.stdout);
    }
    if throw_error {
        return Err(FftermError::CommandFailed {
            code: output.code,
            stderr: output.stderr,
        });
    }
    warn!(code = ?output.code, "Command failed, continuing with captured stdout");
    if !output.stderr.is_empty() {
        writeln!(diagnostics, "{}", output.stderr.trim_end())?;
    }
    Ok(output.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(stdout: &str, stderr: &str, code: Option<i32>) -> RunOutput {
        RunOutput {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            code,
        }
    }

    #[tokio::test]
    async fn drain_tees_exactly_the_captured_bytes() {
        // Larger than one read so the tee sees several chunks.
        let input: Vec<u8> = (0..READ_CHUNK * 2 + 123).map(|i| (i % 251) as u8).collect();
        let mut sink = Vec::new();
        let captured = drain(Some(&input[..]), Some(&mut sink)).await.unwrap();
        assert_eq!(captured, input);
        assert_eq!(sink, captured);
    }

    #[tokio::test]
    async fn drain_without_tee_still_captures() {
        let captured = drain(Some(&b"only captured"[..]), None::<tokio::io::Sink>)
            .await
            .unwrap();
        assert_eq!(captured, b"only captured");
    }

    #[tokio::test]
    async fn drain_of_missing_pipe_is_empty() {
        let captured = drain(None::<&[u8]>, None::<tokio::io::Sink>).await.unwrap();
        assert!(captured.is_empty());
    }

    #[test]
    fn settle_success_returns_stdout_and_writes_nothing() {
        let mut diagnostics = Vec::new();
        let result = settle(output("hello\n", "noise", Some(0)), true, &mut diagnostics);
        assert_eq!(result.unwrap(), "hello\n");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn settle_lenient_failure_reports_stderr() {
        let mut diagnostics = Vec::new();
        let result = settle(output("partial", "boom\n", Some(1)), false, &mut diagnostics);
        assert_eq!(result.unwrap(), "partial");
        assert_eq!(String::from_utf8(diagnostics).unwrap(), "boom\n");
    }

    #[test]
    fn settle_lenient_failure_without_stderr_is_quiet() {
        let mut diagnostics = Vec::new();
        let result = settle(output("", "", Some(1)), false, &mut diagnostics);
        assert_eq!(result.unwrap(), "");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn settle_strict_failure_carries_code_and_stderr() {
        let mut diagnostics = Vec::new();
        let err = settle(output("", "bad input", Some(4)), true, &mut diagnostics).unwrap_err();
        match err {
            FftermError::CommandFailed { code, ref stderr } => {
                assert_eq!(code, Some(4));
                assert_eq!(stderr, "bad input");
            },
            other => panic!("Expected CommandFailed, got {:?}", other),
        }
        assert!(err.to_string().contains("4"));
        assert!(err.to_string().contains("bad input"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn settle_treats_signal_exit_as_failure() {
        let mut diagnostics = Vec::new();
        let err = settle(output("", "", None), true, &mut diagnostics).unwrap_err();
        assert_eq!(err.exit_code(), None);
    }
}
