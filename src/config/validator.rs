//! Configuration validator for Kernel32-ABI

use super::loader::{Config, ConfigError};
use crate::inspect::registry::Group;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates the entire configuration
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Self::validate_report(config)?;
        Self::validate_logging(config)?;
        Ok(())
    }

    fn validate_report(config: &Config) -> Result<(), ConfigError> {
        let report = &config.report;
        if !report.layouts && !report.constants {
            return Err(ConfigError::Invalid(
                "report must include layouts, constants or both".to_string(),
            ));
        }

        for group in &report.groups {
            group
                .parse::<Group>()
                .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        }
        Ok(())
    }

    fn validate_logging(config: &Config) -> Result<(), ConfigError> {
        let level = config.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Invalid log level: {}",
                config.logging.level
            )));
        }
        Ok(())
    }
}

/// Validates a configuration
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    ConfigValidator::validate(config)
}
