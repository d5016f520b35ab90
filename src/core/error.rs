//! Custom error types for Kernel32-ABI

use thiserror::Error;

/// Main error type for ABI conversions and snapshot walking
#[derive(Error, Debug)]
pub enum AbiError {
    #[error("Unknown {kind} value: {value:#x}")]
    UnknownValue { kind: &'static str, value: u32 },

    #[error("Unknown constant: {0}")]
    UnknownConstant(String),

    #[error("Unknown constant group: {0}")]
    UnknownGroup(String),

    #[error("Buffer too small: expected {expected}, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },

    #[error("Record size mismatch for {record}: declared {declared}, expected {expected}")]
    SizeMismatch {
        record: &'static str,
        declared: u32,
        expected: u32,
    },

    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApiError(#[from] ::windows::core::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlError(#[from] toml::ser::Error),
}

/// Result type alias for Kernel32-ABI operations
pub type AbiResult<T> = Result<T, AbiError>;

impl AbiError {
    /// Creates a Windows API error from the calling thread's last error code
    #[cfg(windows)]
    pub fn last_os_error() -> Self {
        AbiError::WindowsApiError(::windows::core::Error::from_win32())
    }

    /// Creates an unknown enumeration value error
    pub fn unknown_value(kind: &'static str, value: u32) -> Self {
        AbiError::UnknownValue { kind, value }
    }

    /// Creates a buffer too small error
    pub fn buffer_too_small(expected: usize, actual: usize) -> Self {
        AbiError::BufferTooSmall { expected, actual }
    }
}
