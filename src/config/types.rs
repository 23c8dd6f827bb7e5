//! Configuration data model.
//!
//! Only struct definitions and their defaults live here; precedence and
//! source resolution stay in `config::mod`.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::defaults::{DEFAULT_SESSION_NAME, DEFAULT_TIMEOUT_MS};

/// Top-level runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub zellij: ZellijConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zellij: ZellijConfig {
                session: DEFAULT_SESSION_NAME.to_string(),
                binary: super::bundled_binary_path(),
                timeout_ms: DEFAULT_TIMEOUT_MS,
            },
        }
    }
}

/// Resolved settings for talking to the zellij binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZellijConfig {
    /// Session targeted when a call does not override it.
    pub session: String,
    /// Absolute (or install-relative) path of the zellij executable.
    pub binary: PathBuf,
    /// Default per-subprocess timeout in milliseconds.
    pub timeout_ms: u64,
}

impl ZellijConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Non-fatal notes produced while loading configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDiagnostics {
    pub warnings: Vec<String>,
}

/// Loaded configuration plus its diagnostics.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub diagnostics: ConfigDiagnostics,
}

/// On-disk shape of `zellij-tools.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileConfig {
    pub(super) zellij: FileZellijConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileZellijConfig {
    pub(super) session: Option<String>,
    pub(super) binary: Option<PathBuf>,
    pub(super) timeout_ms: Option<u64>,
}
