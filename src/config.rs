use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::guide::MatchPolicy;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct GuideConfig {
    pub server: ServerConfig,
    pub matching: MatchingConfig,
    pub chat: ChatConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// `stdio` or `http`.
    pub transport: String,
    pub log_level: String,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct MatchingConfig {
    pub policy: MatchPolicy,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChatConfig {
    pub user_label: String,
    pub assistant_label: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: "stdio".into(),
            log_level: "info".into(),
            host: "127.0.0.1".into(),
            port: 8765,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            user_label: "You".into(),
            assistant_label: "Heritage Guide".into(),
        }
    }
}

/// Returns `~/.binondo/`, or `./.binondo/` when there is no home directory.
pub fn default_guide_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".binondo")
}

/// Returns the default config file path: `~/.binondo/config.toml`
pub fn default_config_path() -> PathBuf {
    default_guide_dir().join("config.toml")
}

impl GuideConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            GuideConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    /// (BINONDO_LOG_LEVEL, BINONDO_TRANSPORT, BINONDO_MATCH_POLICY).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("BINONDO_LOG_LEVEL") {
            self.server.log_level = val;
        }
        if let Ok(val) = std::env::var("BINONDO_TRANSPORT") {
            self.server.transport = val;
        }
        if let Ok(val) = std::env::var("BINONDO_MATCH_POLICY") {
            match val.parse() {
                Ok(policy) => self.matching.policy = policy,
                Err(e) => tracing::warn!(value = %val, "ignoring BINONDO_MATCH_POLICY: {e}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GuideConfig::default();
        assert_eq!(config.server.transport, "stdio");
        assert_eq!(config.server.log_level, "info");
        assert_eq!(config.server.port, 8765);
        assert_eq!(config.matching.policy, MatchPolicy::Longest);
        assert_eq!(config.chat.assistant_label, "Heritage Guide");
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[server]
log_level = "debug"
transport = "http"

[matching]
policy = "declaration"
"#;
        let config: GuideConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.log_level, "debug");
        assert_eq!(config.server.transport, "http");
        assert_eq!(config.matching.policy, MatchPolicy::Declaration);
        // defaults still apply for unset fields
        assert_eq!(config.server.port, 8765);
        assert_eq!(config.chat.user_label, "You");
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let toml_str = "[matching]\npolicy = \"shortest\"\n";
        assert!(toml::from_str::<GuideConfig>(toml_str).is_err());
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = GuideConfig::default();
        std::env::set_var("BINONDO_LOG_LEVEL", "trace");
        std::env::set_var("BINONDO_TRANSPORT", "http");
        std::env::set_var("BINONDO_MATCH_POLICY", "declaration");

        config.apply_env_overrides();

        assert_eq!(config.server.log_level, "trace");
        assert_eq!(config.server.transport, "http");
        assert_eq!(config.matching.policy, MatchPolicy::Declaration);

        // Clean up
        std::env::remove_var("BINONDO_LOG_LEVEL");
        std::env::remove_var("BINONDO_TRANSPORT");
        std::env::remove_var("BINONDO_MATCH_POLICY");
    }
}
