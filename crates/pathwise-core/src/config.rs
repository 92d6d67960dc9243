//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_QUIZ_SIZE;

/// Environment variable that overrides the configured shuffle seed.
pub const SEED_ENV_VAR: &str = "PATHWISE_SEED";

/// Top-level pathwise configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathwiseConfig {
    /// Number of questions drawn per quiz.
    #[serde(default = "default_quiz_size")]
    pub quiz_size: usize,
    /// Fixed shuffle seed; entropy is used when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Question catalog file; the built-in catalog is used when absent.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Default roster file for teacher commands.
    #[serde(default)]
    pub roster: Option<PathBuf>,
}

fn default_quiz_size() -> usize {
    DEFAULT_QUIZ_SIZE
}

impl Default for PathwiseConfig {
    fn default() -> Self {
        Self {
            quiz_size: default_quiz_size(),
            seed: None,
            catalog: None,
            roster: None,
        }
    }
}

/// Expand `${VAR_NAME}` references from the environment.
///
/// Substituted values are not rescanned. Unknown variables expand to the
/// empty string and an unterminated `${` is kept as written.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start + 2..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + 2 + len];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + 2 + len + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Parse a config from TOML text, expanding `${VAR}` in path values.
pub fn parse_config_str(content: &str, source_path: &Path) -> Result<PathwiseConfig> {
    let mut config: PathwiseConfig = toml::from_str(content)
        .with_context(|| format!("failed to parse config: {}", source_path.display()))?;

    config.catalog = config.catalog.as_deref().map(resolve_path);
    config.roster = config.roster.as_deref().map(resolve_path);

    if config.quiz_size == 0 {
        anyhow::bail!(
            "invalid config {}: quiz_size must be at least 1",
            source_path.display()
        );
    }

    Ok(config)
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `pathwise.toml` in the current directory
/// 2. `~/.config/pathwise/config.toml`
///
/// `PATHWISE_SEED` overrides the configured seed.
pub fn load_config() -> Result<PathwiseConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<PathwiseConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("pathwise.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content, &path)?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => PathwiseConfig::default(),
    };

    if let Ok(seed) = std::env::var(SEED_ENV_VAR) {
        config.seed = Some(
            seed.trim()
                .parse()
                .with_context(|| format!("{SEED_ENV_VAR} is not a valid seed: {seed}"))?,
        );
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("pathwise"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_PATHWISE_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_PATHWISE_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_PATHWISE_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("no_close_${brace"), "no_close_${brace");
        std::env::remove_var("_PATHWISE_TEST_VAR");
    }

    #[test]
    fn resolve_env_vars_does_not_rescan_values() {
        std::env::set_var("_PATHWISE_SELF_REF", "${_PATHWISE_SELF_REF}");
        assert_eq!(
            resolve_env_vars("${_PATHWISE_SELF_REF}/x"),
            "${_PATHWISE_SELF_REF}/x"
        );
        std::env::remove_var("_PATHWISE_SELF_REF");
    }

    #[test]
    fn resolve_env_vars_multiple_and_unknown() {
        std::env::set_var("_PATHWISE_A", "a");
        std::env::set_var("_PATHWISE_B", "b");
        assert_eq!(
            resolve_env_vars("${_PATHWISE_A}/${_PATHWISE_B}/${_PATHWISE_UNSET_VAR}/z"),
            "a/b//z"
        );
        std::env::remove_var("_PATHWISE_A");
        std::env::remove_var("_PATHWISE_B");
    }

    #[test]
    fn default_config() {
        let config = PathwiseConfig::default();
        assert_eq!(config.quiz_size, 10);
        assert!(config.seed.is_none());
        assert!(config.catalog.is_none());
    }

    #[test]
    fn parse_full_config() {
        std::env::set_var("_PATHWISE_DATA_DIR", "/srv/pathwise");
        let toml_str = r#"
quiz_size = 5
seed = 42
catalog = "${_PATHWISE_DATA_DIR}/networks.toml"
roster = "data/roster.toml"
"#;
        let config = parse_config_str(toml_str, Path::new("pathwise.toml")).unwrap();
        assert_eq!(config.quiz_size, 5);
        assert_eq!(config.seed, Some(42));
        assert_eq!(
            config.catalog,
            Some(PathBuf::from("/srv/pathwise/networks.toml"))
        );
        assert_eq!(config.roster, Some(PathBuf::from("data/roster.toml")));
        std::env::remove_var("_PATHWISE_DATA_DIR");
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse_config_str("", Path::new("pathwise.toml")).unwrap();
        assert_eq!(config, PathwiseConfig::default());
    }

    #[test]
    fn zero_quiz_size_rejected() {
        let err = parse_config_str("quiz_size = 0", Path::new("pathwise.toml")).unwrap_err();
        assert!(err.to_string().contains("quiz_size"));
    }

    #[test]
    fn explicit_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = load_config_from(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "quiz_size = 3\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.quiz_size, 3);
    }
}
