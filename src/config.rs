//! Configuration management for the taskgate client core
//!
//! Values are loaded from an optional config.toml with environment overrides
//! and fall back to built-in defaults, so embedding applications work with no
//! configuration file at all.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Default storage key for the persisted credential list.
///
/// Kept stable across releases so existing installs keep finding their data.
pub const DEFAULT_STORAGE_KEY: &str = "loginData";

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Directory the key-value storage provider writes into
    pub storage_dir: String,

    /// Key the credential list is persisted under
    pub storage_key: String,
}

impl AppConfig {
    /// Load configuration from config.toml (if present) with environment overrides
    ///
    /// Environment variables use the TASKGATE prefix, e.g. TASKGATE_STORAGE_DIR.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("storage_dir", ".taskgate")?
            .set_default("storage_key", DEFAULT_STORAGE_KEY)?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("TASKGATE"))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the storage directory as PathBuf
    pub fn storage_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.storage_dir)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_dir.is_empty() {
            return Err(ConfigError::Message("storage_dir cannot be empty".into()));
        }

        if self.storage_key.is_empty() {
            return Err(ConfigError::Message("storage_key cannot be empty".into()));
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: ".taskgate".to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.storage_key, "loginData");
    }

    #[test]
    fn test_empty_storage_key_rejected() {
        let config = AppConfig {
            storage_dir: ".taskgate".to_string(),
            storage_key: String::new(),
        };
        assert!(config.validate().is_err());
    }
}
