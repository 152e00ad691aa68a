//! Configuration management for railkeeper.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "railkeeper";

/// Default record slot file name.
const RECORDS_FILE_NAME: &str = "records.json";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `RAILKEEPER_`)
/// 2. TOML config file at `~/.config/railkeeper/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Mock-auth credential configuration.
    pub auth: AuthConfig,
    /// Health service configuration.
    pub health: HealthConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the record slot file.
    /// Defaults to `~/.local/share/railkeeper/records.json`
    pub records_path: Option<PathBuf>,
}

/// Credential pair for the mock verifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Admin username.
    pub username: String,
    /// Admin password.
    pub password: String,
}

/// Configuration for the sibling health service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Host to bind the health endpoint on.
    pub host: String,
    /// Port to bind the health endpoint on.
    pub port: u16,
}

impl Default for AuthConfig {
    fn default() -> Self {
        // The original deployment's hardcoded mock pair.
        Self {
            username: "admin".to_string(),
            password: "admin".to_string(),
        }
    }
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `RAILKEEPER_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("RAILKEEPER_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.auth.username.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "auth.username must not be blank".to_string(),
            });
        }

        if self.health.port == 0 {
            return Err(Error::ConfigValidation {
                message: "health.port must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Get the record slot path, resolving defaults if not set.
    #[must_use]
    pub fn records_path(&self) -> PathBuf {
        self.storage
            .records_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(RECORDS_FILE_NAME))
    }

    /// Get the health service listen address as `host:port`.
    #[must_use]
    pub fn health_addr(&self) -> String {
        format!("{}:{}", self.health.host, self.health.port)
    }
}
