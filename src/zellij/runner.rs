//! Session-targeted zellij command execution.
//!
//! Every call spawns exactly one child process, bounded by a timeout, and
//! turns whatever happened into either a [`CommandResult`] or a
//! [`ZellijError`]. Non-zero exits are ordinary results on the unchecked
//! path; the `*_checked` variants turn them into errors.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tracing::debug;

use super::process::{ProcessLauncher, ProcessStatus, TokioLauncher};
use crate::config::ZellijConfig;
use crate::error::ZellijError;

/// Pause after a successful checked command.
///
/// zellij acknowledges a CLI action before its server has applied it; callers
/// issuing dependent commands back to back rely on this gap.
pub const ACTION_SETTLE_DELAY: Duration = Duration::from_millis(60);

/// Placeholder used when a failed command printed nothing at all.
const UNKNOWN_ERROR: &str = "unknown error";

/// Per-call knobs. Construct fresh for each call; all fields are optional.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommandOptions {
    /// Session to target instead of the runner's configured one.
    pub session: Option<String>,
    /// Skip `--session` injection (top-level commands like `list-sessions`).
    pub raw: bool,
    /// Subprocess timeout; the runner default applies when unset.
    pub timeout: Option<Duration>,
}

impl CommandOptions {
    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        self.session = Some(session.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn as_raw(&self) -> Self {
        Self {
            raw: true,
            ..self.clone()
        }
    }
}

/// Normalized outcome of one zellij invocation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    /// 0 on success, the child's code on failure, or 1 when it had none.
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs the zellij binary against one session.
#[derive(Clone)]
pub struct CommandRunner {
    binary: PathBuf,
    session: String,
    timeout: Duration,
    launcher: Arc<dyn ProcessLauncher>,
}

impl CommandRunner {
    /// Runner spawning real processes per the resolved configuration.
    pub fn new(config: &ZellijConfig) -> Self {
        Self::with_launcher(config, Arc::new(TokioLauncher))
    }

    pub fn with_launcher(config: &ZellijConfig, launcher: Arc<dyn ProcessLauncher>) -> Self {
        Self {
            binary: config.binary.clone(),
            session: config.session.clone(),
            timeout: config.timeout(),
            launcher,
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Session a call with these options will target.
    pub fn session_for<'a>(&'a self, options: &'a CommandOptions) -> &'a str {
        options.session.as_deref().unwrap_or(&self.session)
    }

    /// Exact argv handed to the child for these args and options.
    pub fn effective_args<S: AsRef<str>>(&self, args: &[S], options: &CommandOptions) -> Vec<String> {
        let mut full = Vec::with_capacity(args.len() + 2);
        if !options.raw {
            full.push("--session".to_string());
            full.push(self.session_for(options).to_string());
        }
        full.extend(args.iter().map(|arg| arg.as_ref().to_string()));
        full
    }

    /// Run zellij once and normalize the result.
    ///
    /// Resolves for any exit code. Fails only when the child could not be
    /// spawned or waited on, or was killed for exceeding its timeout.
    pub async fn execute<S: AsRef<str>>(
        &self,
        args: &[S],
        options: &CommandOptions,
    ) -> Result<CommandResult, ZellijError> {
        let full_args = self.effective_args(args, options);
        let limit = options.timeout.unwrap_or(self.timeout);
        debug!(
            binary = %self.binary.display(),
            args = ?full_args,
            timeout_ms = limit.as_millis() as u64,
            "running zellij"
        );

        let output = self.launcher.launch(&self.binary, &full_args, limit).await?;
        let exit_code = match output.status {
            ProcessStatus::Exited(code) => code,
            ProcessStatus::Terminated => 1,
            ProcessStatus::TimedOut => {
                return Err(ZellijError::Timeout {
                    timeout: limit,
                    args: full_args,
                })
            }
        };

        Ok(CommandResult {
            stdout: output.stdout.trim().to_string(),
            stderr: output.stderr.trim().to_string(),
            exit_code,
        })
    }

    /// `execute(["action", ...args])`.
    pub async fn execute_action<S: AsRef<str>>(
        &self,
        args: &[S],
        options: &CommandOptions,
    ) -> Result<CommandResult, ZellijError> {
        let full = action_args(args);
        self.execute(full.as_slice(), options).await
    }

    /// Run a session action and require exit code 0; returns trimmed stdout.
    pub async fn execute_action_checked<S: AsRef<str>>(
        &self,
        args: &[S],
        options: &CommandOptions,
    ) -> Result<String, ZellijError> {
        let full = action_args(args);
        let result = self.execute(full.as_slice(), options).await?;
        settle(result, full.as_slice()).await
    }

    /// `execute` with session injection forced off.
    pub async fn execute_raw<S: AsRef<str>>(
        &self,
        args: &[S],
        options: &CommandOptions,
    ) -> Result<CommandResult, ZellijError> {
        self.execute(args, &options.as_raw()).await
    }

    /// Checked variant of [`CommandRunner::execute_raw`].
    pub async fn execute_raw_checked<S: AsRef<str>>(
        &self,
        args: &[S],
        options: &CommandOptions,
    ) -> Result<String, ZellijError> {
        let result = self.execute(args, &options.as_raw()).await?;
        settle(result, args).await
    }
}

fn action_args<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    std::iter::once("action".to_string())
        .chain(args.iter().map(|arg| arg.as_ref().to_string()))
        .collect()
}

/// Shared tail of the checked paths: fail on non-zero, else wait and return stdout.
async fn settle<S: AsRef<str>>(result: CommandResult, args: &[S]) -> Result<String, ZellijError> {
    if !result.success() {
        return Err(ZellijError::CommandFailed {
            verb: describe_verb(args),
            details: failure_details(&result),
        });
    }
    sleep(ACTION_SETTLE_DELAY).await;
    Ok(result.stdout)
}

/// `action go-to-tab-name` for actions, the bare command otherwise.
fn describe_verb<S: AsRef<str>>(args: &[S]) -> String {
    match args {
        [first, second, ..] if first.as_ref() == "action" => {
            format!("action {}", second.as_ref())
        }
        [first, ..] => first.as_ref().to_string(),
        [] => "command".to_string(),
    }
}

fn failure_details(result: &CommandResult) -> String {
    if !result.stderr.is_empty() {
        result.stderr.clone()
    } else if !result.stdout.is_empty() {
        result.stdout.clone()
    } else {
        UNKNOWN_ERROR.to_string()
    }
}
