use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::http::HttpConfig;
use super::lists::ListsConfig;
use super::logging::LoggingConfig;
use super::storage::StorageConfig;
use crate::ListKind;

const LOCAL_CONFIG_PATH: &str = "govpl-verifier.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/govpl-verifier/config.toml";

/// Main configuration structure for the GOV.PL verifier
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Remote list sources, cache lifetimes and refresh periods
    #[serde(default)]
    pub lists: ListsConfig,

    /// HTTP client settings used for list downloads
    #[serde(default)]
    pub http: HttpConfig,

    /// Durable key-value storage for the list caches
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. govpl-verifier.toml in current directory
    /// 3. /etc/govpl-verifier/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.lists.fill_defaults();
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Config =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.lists.fill_defaults();
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(db) = overrides.database_path {
            self.storage.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in ListKind::ALL {
            let source = self.lists.get(kind);
            let url = source.url.trim();
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::Validation(format!(
                    "{} list URL must be http(s), got '{}'",
                    kind, source.url
                )));
            }
            if source.ttl_secs == 0 {
                return Err(ConfigError::Validation(format!(
                    "{} list TTL cannot be 0",
                    kind
                )));
            }
            if source.refresh_interval_secs == 0 {
                return Err(ConfigError::Validation(format!(
                    "{} list refresh interval cannot be 0",
                    kind
                )));
            }
        }

        if self.http.fetch_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "HTTP fetch timeout cannot be 0".to_string(),
            ));
        }

        if self.storage.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Storage path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}
