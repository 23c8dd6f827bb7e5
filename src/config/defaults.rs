//! Default configuration constants.
//!
//! Keeping defaults in one module lets the loader, the data model and tests
//! share the same literals.

/// Session targeted when neither the environment nor the config file names one.
pub(super) const DEFAULT_SESSION_NAME: &str = "default";
/// Default per-subprocess timeout.
pub(super) const DEFAULT_TIMEOUT_MS: u64 = 10_000;
/// Environment variable naming the target session.
pub(super) const SESSION_ENV: &str = "ZELLIJ_SESSION_NAME";
/// Environment variable overriding the per-subprocess timeout.
pub(super) const TIMEOUT_ENV: &str = "ZELLIJ_TOOLS_TIMEOUT_MS";
/// Zellij binary location relative to the directory holding our executable.
pub(super) const BUNDLED_BINARY_RELATIVE: &str = "bin/zellij";
/// Config file name used for both local and global lookup.
pub(super) const CONFIG_FILE_NAME: &str = "zellij-tools.toml";
/// Directory under the user config root holding the global config file.
pub(super) const CONFIG_DIR_NAME: &str = "zellij-tools";
