//! Unified error types for the zellij control surface.

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// ZellijError
// ---------------------------------------------------------------------------

/// Errors arising from talking to the zellij binary.
#[derive(Debug)]
pub enum ZellijError {
    /// The child process could not be started at all.
    Spawn {
        program: String,
        source: std::io::Error,
    },
    /// The child started but waiting on it or reading its output failed.
    Io {
        program: String,
        source: std::io::Error,
    },
    /// The child exceeded its allotted time and was killed.
    Timeout {
        timeout: Duration,
        args: Vec<String>,
    },
    /// A checked command exited non-zero.
    CommandFailed { verb: String, details: String },
}

impl fmt::Display for ZellijError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn { program, source } => write!(f, "failed to spawn {program}: {source}"),
            Self::Io { program, source } => write!(f, "{program}: {source}"),
            Self::Timeout { timeout, args } => write!(
                f,
                "zellij timed out after {}ms running `{}`",
                timeout.as_millis(),
                args.join(" ")
            ),
            Self::CommandFailed { verb, details } => write!(f, "zellij {verb} failed: {details}"),
        }
    }
}

impl std::error::Error for ZellijError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn { source, .. } | Self::Io { source, .. } => Some(source),
            Self::Timeout { .. } | Self::CommandFailed { .. } => None,
        }
    }
}

impl ZellijError {
    /// True when the failure came from the subprocess timeout, not an exit code.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}
