//! Configuration module for Kernel32-ABI
//!
//! Controls what the `kernel32-abi` binary reports and how it logs.

mod defaults;
mod loader;
mod validator;

pub use defaults::{default_config, DEFAULT_CONFIG_FILE, DEFAULT_LOG_LEVEL};
pub use loader::{load_config, ConfigLoader};
pub use validator::{validate_config, ConfigValidator};

// Re-export the configuration structures
pub use loader::{Config, LoggingConfig, OutputConfig, OutputFormat, ReportConfig};

// Configuration-related error type
pub use loader::ConfigError;

// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;
