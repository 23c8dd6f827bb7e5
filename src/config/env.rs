//! Environment overrides applied on top of file/default values.

use crate::error::ConfigError;

use super::defaults::{SESSION_ENV, TIMEOUT_ENV};
use super::Config;

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(session) = non_blank_env(env_lookup, SESSION_ENV) {
        config.zellij.session = session;
    }
    if let Some(timeout) = non_blank_env(env_lookup, TIMEOUT_ENV) {
        let parsed = timeout.parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid {TIMEOUT_ENV} value `{timeout}`: expected positive integer milliseconds"
            ))
        })?;
        // Zero would make every call time out immediately.
        config.zellij.timeout_ms = parsed.max(1);
    }
    Ok(())
}

/// Read an env var, treating blank values as unset.
fn non_blank_env<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn session_env_overrides_config_value() {
        let mut config = Config::default();
        config.zellij.session = "from-file".into();
        apply_runtime_env_overrides(&mut config, &lookup(&[("ZELLIJ_SESSION_NAME", "work")]))
            .unwrap();
        assert_eq!(config.zellij.session, "work");
    }

    #[test]
    fn blank_session_env_is_ignored() {
        let mut config = Config::default();
        config.zellij.session = "from-file".into();
        apply_runtime_env_overrides(&mut config, &lookup(&[("ZELLIJ_SESSION_NAME", "  ")]))
            .unwrap();
        assert_eq!(config.zellij.session, "from-file");
    }

    #[test]
    fn timeout_env_parses_and_clamps_zero() {
        let mut config = Config::default();
        apply_runtime_env_overrides(&mut config, &lookup(&[("ZELLIJ_TOOLS_TIMEOUT_MS", "0")]))
            .unwrap();
        assert_eq!(config.zellij.timeout_ms, 1);

        apply_runtime_env_overrides(
            &mut config,
            &lookup(&[("ZELLIJ_TOOLS_TIMEOUT_MS", "2500")]),
        )
        .unwrap();
        assert_eq!(config.zellij.timeout_ms, 2500);
    }

    #[test]
    fn timeout_env_rejects_non_numeric() {
        let mut config = Config::default();
        let err = apply_runtime_env_overrides(
            &mut config,
            &lookup(&[("ZELLIJ_TOOLS_TIMEOUT_MS", "soon")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("ZELLIJ_TOOLS_TIMEOUT_MS"), "got: {err}");
    }
}
