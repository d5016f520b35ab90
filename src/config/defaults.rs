//! Default configuration values for Kernel32-ABI

use super::loader::{Config, LoggingConfig, OutputConfig, OutputFormat, ReportConfig};

/// File the binary reads when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "kernel32-abi.toml";

/// Level logged at until a configuration has been read
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Returns the default configuration
pub fn default_config() -> Config {
    Config {
        report: default_report(),
        output: default_output(),
        logging: default_logging(),
    }
}

pub(super) fn default_report() -> ReportConfig {
    ReportConfig {
        layouts: true,
        constants: true,
        groups: Vec::new(),
    }
}

pub(super) fn default_output() -> OutputConfig {
    OutputConfig {
        format: OutputFormat::Json,
        pretty: true,
    }
}

pub(super) fn default_logging() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
    }
}

// Individual field defaults for serde
pub(super) fn default_true() -> bool {
    true
}

pub(super) fn default_format() -> OutputFormat {
    OutputFormat::Json
}

pub(super) fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert!(config.report.layouts);
        assert!(config.report.constants);
        assert!(config.report.groups.is_empty());
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_serialization() {
        let config = default_config();
        let serialized = toml::to_string(&config).unwrap();
        assert!(serialized.contains("[report]"));
        assert!(serialized.contains("format = \"json\""));

        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.output.format, config.output.format);
        assert_eq!(deserialized.logging.level, config.logging.level);
    }
}
