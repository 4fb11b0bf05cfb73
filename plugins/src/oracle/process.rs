use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use oddjobs_core::api::{probe_input, EchoOracle, VerifyError};

use super::first_line;

/// Spawns a fresh child per value: writes the probe to its stdin, closes it,
/// waits for the child to exit and returns the first stdout line.
pub struct ProcessOracle {
    program: PathBuf,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl ProcessOracle {
    /// `program` is tilde-expanded and looked up on `PATH`; names that do not
    /// resolve are used as given so spawning reports the failure.
    pub fn new(program: &str, args: Vec<String>) -> Self {
        let expanded = shellexpand::tilde(program).into_owned();
        let program = which::which(&expanded).unwrap_or_else(|_| PathBuf::from(expanded));
        Self {
            program,
            args,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &std::path::Path {
        &self.program
    }
}

#[async_trait]
impl EchoOracle for ProcessOracle {
    fn name(&self) -> &str {
        "process"
    }

    async fn echo(&self, value: u32) -> Result<Option<String>, VerifyError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| VerifyError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        let stream_err = |stream: &'static str| {
            move |source| VerifyError::StreamIo {
                stream,
                value,
                source,
            }
        };

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(probe_input(value).as_bytes())
                .await
                .map_err(stream_err("stdin"))?;
            stdin.flush().await.map_err(stream_err("stdin"))?;
        }

        let wait = child.wait_with_output();
        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, wait)
                .await
                .map_err(|_| VerifyError::Timeout {
                    value,
                    timeout_ms: limit.as_millis() as u64,
                })?,
            None => wait.await,
        }
        .map_err(stream_err("stdout"))?;

        tracing::debug!(
            value,
            exit_code = ?output.status.code(),
            stdout_bytes = output.stdout.len(),
            "echo child exited"
        );
        Ok(first_line(&output.stdout))
    }
}
