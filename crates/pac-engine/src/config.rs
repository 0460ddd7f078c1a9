//! Engine Configuration
//!
//! Loaded from a TOML file. Every field is optional:
//!
//! ```toml
//! instance = "pac"            # stamp attribute becomes data-pac
//! rules = "rules.json"        # omit for the built-in rule set
//! log_filter = "pac_a11y=debug,info"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use pac_a11y::RuleConfig;
use pac_dom::{DEFAULT_INSTANCE, StampAttribute};
use serde::{Deserialize, Serialize};

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid rule file {path}: {source}")]
    Rules {
        path: PathBuf,
        #[source]
        source: pac_a11y::RuleConfigError,
    },
}

/// Engine configuration options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Instance name embedded in the stamp attribute
    pub instance: String,

    /// JSON rule file; the built-in rules apply when unset
    pub rules: Option<PathBuf>,

    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            instance: DEFAULT_INSTANCE.to_string(),
            rules: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// A relative `rules` path is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::load_str(&content)?;
        if let (Some(rules), Some(dir)) = (config.rules.as_mut(), path.parent()) {
            if rules.is_relative() {
                *rules = dir.join(&*rules);
            }
        }
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load configuration from a string
    pub fn load_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Stamp attribute for this instance
    pub fn stamp(&self) -> StampAttribute {
        StampAttribute::for_instance(&self.instance)
    }

    /// Rule set named by `rules`, or the built-in one
    pub fn rule_config(&self) -> Result<RuleConfig, ConfigError> {
        let Some(path) = &self.rules else {
            return Ok(RuleConfig::standard());
        };
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let rules = RuleConfig::from_json(&json).map_err(|source| ConfigError::Rules {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), rules = rules.rule_count(), "Loaded rule file");
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_empty_config() {
        let config = Config::load_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.stamp().name(), "data-pac");
    }

    #[test]
    fn test_load_full_config() {
        let content = r#"
            instance = "Audit Panel"
            rules = "/etc/pac/rules.json"
            log_filter = "debug"
        "#;
        let config = Config::load_str(content).unwrap();
        assert_eq!(config.stamp().name(), "data-audit-panel");
        assert_eq!(config.rules, Some(PathBuf::from("/etc/pac/rules.json")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            Config::load_str("instanse = \"x\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::load_str("instance = [unclosed").is_err());
    }

    #[test]
    fn test_default_rules_are_builtin() {
        let rules = Config::default().rule_config().unwrap();
        assert_eq!(rules, RuleConfig::standard());
    }

    #[test]
    fn test_missing_rule_file() {
        let config = Config {
            rules: Some(PathBuf::from("/nonexistent/rules.json")),
            ..Config::default()
        };
        assert!(matches!(config.rule_config(), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_nonexistent_config_file() {
        let result = Config::load(Path::new("/nonexistent/path/pac.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
