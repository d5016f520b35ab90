//! Configuration loader for Kernel32-ABI
//!
//! Handles loading configuration from TOML files and merging with defaults.

use super::defaults::{
    default_config, default_format, default_log_level, default_logging, default_output,
    default_report, default_true, DEFAULT_CONFIG_FILE,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_report")]
    pub report: ReportConfig,

    #[serde(default = "default_output")]
    pub output: OutputConfig,

    #[serde(default = "default_logging")]
    pub logging: LoggingConfig,
}

/// What the report contains
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_true")]
    pub layouts: bool,
    #[serde(default = "default_true")]
    pub constants: bool,
    /// Constant groups to include; empty means all
    #[serde(default)]
    pub groups: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Toml,
}

/// How the report is rendered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: OutputFormat,
    #[serde(default = "default_true")]
    pub pretty: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}

/// Configuration loader
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        ConfigLoader {
            config_path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Loads configuration from file
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            return Err(ConfigError::FileNotFound(
                self.config_path.display().to_string(),
            ));
        }

        let contents = fs::read_to_string(&self.config_path)?;
        let config: Config = toml::from_str(&contents)?;
        debug!(path = %self.config_path.display(), "loaded configuration");
        Ok(config)
    }

    /// Loads configuration or returns defaults if it cannot be read
    pub fn load_or_default(&self) -> Config {
        match self.load() {
            Ok(config) => config,
            Err(ConfigError::FileNotFound(_)) => Config::default(),
            Err(err) => {
                warn!(path = %self.config_path.display(), error = %err, "using default configuration");
                Config::default()
            }
        }
    }

    /// Saves configuration to file
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, contents)?;
        Ok(())
    }
}

/// Loads configuration from the default location
pub fn load_config() -> Config {
    ConfigLoader::new(DEFAULT_CONFIG_FILE).load_or_default()
}
