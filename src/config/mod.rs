//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`ZELLIJ_SESSION_NAME`, `ZELLIJ_TOOLS_TIMEOUT_MS`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./zellij-tools.toml in the current directory
//! 4. $XDG_CONFIG_HOME/zellij-tools/zellij-tools.toml
//!    (or ~/.config/zellij-tools/zellij-tools.toml)
//! 5. Built-in defaults
//!
//! A per-call session override in `CommandOptions` still beats all of these;
//! that choice is made by the runner, not here.

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

mod defaults;
mod env;
mod types;

use defaults::{
    BUNDLED_BINARY_RELATIVE, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_SESSION_NAME,
    DEFAULT_TIMEOUT_MS,
};
use env::apply_runtime_env_overrides;
use types::FileConfig;
pub use types::{Config, ConfigDiagnostics, LoadedConfig, ZellijConfig};

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    Ok(load_config_with_diagnostics(path_override)?.config)
}

/// Load configuration and return non-fatal diagnostics.
pub fn load_config_with_diagnostics(
    path_override: Option<&str>,
) -> Result<LoadedConfig, ConfigError> {
    load_config_with_diagnostics_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

fn load_config_with_diagnostics_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let config_text = read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let parsed: FileConfig = toml::from_str(&config_text)?;
    let mut diagnostics = ConfigDiagnostics::default();
    let mut config = resolve_config_from_file_config(parsed, &mut diagnostics)?;
    apply_runtime_env_overrides(&mut config, &env_lookup)?;

    Ok(LoadedConfig {
        config,
        diagnostics,
    })
}

fn read_config_text_with_sources<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<String, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(p) = path_override {
        return Ok(read_file(Path::new(p))?);
    }

    if let Ok(text) = read_file(Path::new(CONFIG_FILE_NAME)) {
        return Ok(text);
    }
    if let Some(dir) = config_root() {
        let global = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if let Ok(text) = read_file(&global) {
            return Ok(text);
        }
    }

    Ok(String::new())
}

fn resolve_config_from_file_config(
    parsed: FileConfig,
    diagnostics: &mut ConfigDiagnostics,
) -> Result<Config, ConfigError> {
    let file = parsed.zellij;

    let session = match file.session {
        Some(session) if session.trim().is_empty() => {
            diagnostics.warnings.push(format!(
                "Ignoring blank `zellij.session`; using `{DEFAULT_SESSION_NAME}`."
            ));
            DEFAULT_SESSION_NAME.to_string()
        }
        Some(session) => session.trim().to_string(),
        None => DEFAULT_SESSION_NAME.to_string(),
    };

    let binary = match file.binary {
        Some(path) if path.as_os_str().is_empty() => {
            return Err(ConfigError::Invalid(
                "`zellij.binary` must not be empty".into(),
            ))
        }
        Some(path) => path,
        None => bundled_binary_path(),
    };

    let timeout_ms = match file.timeout_ms {
        Some(0) => {
            return Err(ConfigError::Invalid(
                "`zellij.timeout_ms` must be a positive number of milliseconds".into(),
            ))
        }
        Some(ms) => ms,
        None => DEFAULT_TIMEOUT_MS,
    };

    Ok(Config {
        zellij: ZellijConfig {
            session,
            binary,
            timeout_ms,
        },
    })
}

/// Install-relative zellij location: `<dir of current executable>/bin/zellij`.
pub fn bundled_binary_path() -> PathBuf {
    bundled_binary_path_from(std::env::current_exe().ok().as_deref())
}

fn bundled_binary_path_from(current_exe: Option<&Path>) -> PathBuf {
    current_exe
        .and_then(Path::parent)
        .map(|dir| dir.join(BUNDLED_BINARY_RELATIVE))
        .unwrap_or_else(|| PathBuf::from(BUNDLED_BINARY_RELATIVE))
}

/// Root directory for the global config file.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}
