//! Configuration management for the clearance CLI.
//!
//! Configuration is loaded from multiple sources:
//! 1. Default values (hardcoded)
//! 2. Configuration file (YAML)
//! 3. Environment variables (override)
//!
//! Environment variables take precedence over config file values, which
//! take precedence over defaults.
//!
//! # Example
//!
//! ```ignore
//! use clearance_cli::config::AppConfig;
//!
//! // Load from file with env overrides
//! let config = AppConfig::load("config.yaml")?;
//!
//! // Or load from environment only
//! let config = AppConfig::from_env()?;
//! ```

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct AppConfig {
    /// Archive locations
    #[serde(default)]
    pub data: DataSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Archive file locations.
///
/// These settings can be overridden via environment variables with the
/// `CLEARANCE_` prefix and `__` as the nested key separator:
///
/// - `CLEARANCE_DATA__USERS_PATH=/var/lib/clearance/users.csv`
/// - `CLEARANCE_DATA__RESOURCES_PATH=/var/lib/clearance/resources.csv`
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DataSettings {
    /// Path of the user archive
    #[serde(default = "default_users_path")]
    pub users_path: String,

    /// Path of the resource archive
    #[serde(default = "default_resources_path")]
    pub resources_path: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            users_path: default_users_path(),
            resources_path: default_resources_path(),
        }
    }
}

fn default_users_path() -> String {
    "users.csv".to_string()
}

fn default_resources_path() -> String {
    "resources.csv".to_string()
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LoggingSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Use JSON format (true for production, false for development)
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ConfigError),

    #[error("configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}

impl AppConfig {
    /// Load configuration from a YAML file with environment variable
    /// overrides.
    ///
    /// Environment variables are prefixed with `CLEARANCE_` and use `__`
    /// as separator. For example:
    /// - `CLEARANCE_LOGGING__LEVEL=debug` overrides `logging.level`
    /// - `CLEARANCE_DATA__USERS_PATH=...` overrides `data.users_path`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigLoadError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&AppConfig::default())?)
            // Add config file
            .add_source(File::from(path).format(FileFormat::Yaml))
            // Add environment variables with CLEARANCE_ prefix
            .add_source(
                Environment::with_prefix("CLEARANCE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Load configuration from environment variables only.
    ///
    /// Uses default values and allows overrides via CLEARANCE_ prefixed
    /// env vars.
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        let config = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(
                Environment::with_prefix("CLEARANCE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigLoadError::Invalid {
                message: format!(
                    "logging.level must be one of: {:?}, got: {}",
                    valid_levels, self.logging.level
                ),
            });
        }

        if self.data.users_path.trim().is_empty() {
            return Err(ConfigLoadError::Invalid {
                message: "data.users_path must not be empty".to_string(),
            });
        }
        if self.data.resources_path.trim().is_empty() {
            return Err(ConfigLoadError::Invalid {
                message: "data.resources_path must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Test: Can load config from YAML file
    #[test]
    #[serial]
    fn test_can_load_config_from_yaml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
data:
  users_path: /tmp/u.csv
  resources_path: /tmp/r.csv

logging:
  level: debug
  json: true
"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();

        assert_eq!(config.data.users_path, "/tmp/u.csv");
        assert_eq!(config.data.resources_path, "/tmp/r.csv");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    /// Test: Can override config with env vars
    #[test]
    #[serial]
    fn test_can_override_config_with_env_vars() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
data:
  users_path: from-file.csv
"#
        )
        .unwrap();

        std::env::set_var("CLEARANCE_DATA__USERS_PATH", "from-env.csv");
        std::env::set_var("CLEARANCE_LOGGING__LEVEL", "warn");

        let config = AppConfig::load(file.path()).unwrap();

        std::env::remove_var("CLEARANCE_DATA__USERS_PATH");
        std::env::remove_var("CLEARANCE_LOGGING__LEVEL");

        assert_eq!(config.data.users_path, "from-env.csv"); // Overridden by env
        assert_eq!(config.data.resources_path, "resources.csv"); // Default
        assert_eq!(config.logging.level, "warn"); // Overridden by env
    }

    /// Test: Config validation catches errors
    #[test]
    fn test_config_validation_catches_errors() {
        let mut config = AppConfig::default();
        config.logging.level = "invalid".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.level"));

        let mut config = AppConfig::default();
        config.data.users_path = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("users_path"));

        let mut config = AppConfig::default();
        config.data.resources_path = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("resources_path"));
    }

    /// Test: Invalid config returns clear error
    #[test]
    fn test_invalid_config_returns_clear_error() {
        let result = AppConfig::load("/nonexistent/path/config.yaml");
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigLoadError::FileNotFound { .. }));
        assert!(err.to_string().contains("not found"));

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "invalid: yaml: syntax: [").unwrap();
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Load(_)));
    }

    /// Test: Default config is valid
    #[test]
    #[serial]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());

        assert_eq!(config.data.users_path, "users.csv");
        assert_eq!(config.data.resources_path, "resources.csv");
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    /// Test: from_env loads defaults with env overrides
    #[test]
    #[serial]
    fn test_from_env_loads_defaults_with_env_overrides() {
        std::env::set_var("CLEARANCE_DATA__RESOURCES_PATH", "rooms.csv");

        let config = AppConfig::from_env().unwrap();

        std::env::remove_var("CLEARANCE_DATA__RESOURCES_PATH");

        assert_eq!(config.data.resources_path, "rooms.csv");
        assert_eq!(config.data.users_path, "users.csv"); // default
    }
}
