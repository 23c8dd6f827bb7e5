//! Child-process seam used by the command runner.
//!
//! The runner never talks to `tokio::process` directly; it goes through
//! [`ProcessLauncher`] so tests can script exit codes, output and timeouts.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tokio::time::{timeout, Duration};

use crate::error::ZellijError;

/// How a child process ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProcessStatus {
    /// Exited on its own with a numeric code (zero or not).
    Exited(i32),
    /// Ended without a numeric exit code, e.g. killed by a signal.
    Terminated,
    /// Killed by us after exceeding the allotted duration.
    TimedOut,
}

/// Raw, untrimmed output of one child process.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProcessOutput {
    pub status: ProcessStatus,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn exited(code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            status: ProcessStatus::Exited(code),
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn timed_out() -> Self {
        Self {
            status: ProcessStatus::TimedOut,
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

/// Spawns exactly one child per call and waits for it, bounded by `limit`.
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    async fn launch(
        &self,
        program: &Path,
        args: &[String],
        limit: Duration,
    ) -> Result<ProcessOutput, ZellijError>;
}

/// Production launcher backed by `tokio::process`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioLauncher;

#[async_trait]
impl ProcessLauncher for TokioLauncher {
    async fn launch(
        &self,
        program: &Path,
        args: &[String],
        limit: Duration,
    ) -> Result<ProcessOutput, ZellijError> {
        let mut cmd = Command::new(program);
        // Dropping the wait future on timeout must take the child down with it.
        cmd.kill_on_drop(true);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let child = cmd.spawn().map_err(|source| ZellijError::Spawn {
            program: program.display().to_string(),
            source,
        })?;

        let output = match timeout(limit, child.wait_with_output()).await {
            Ok(result) => result.map_err(|source| ZellijError::Io {
                program: program.display().to_string(),
                source,
            })?,
            Err(_) => return Ok(ProcessOutput::timed_out()),
        };

        Ok(ProcessOutput {
            status: match output.status.code() {
                Some(code) => ProcessStatus::Exited(code),
                None => ProcessStatus::Terminated,
            },
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
