//! Core module containing the crate-wide error type and build metadata
//!
//! Everything else in Kernel32-ABI is a passive definition; the only
//! fallible paths are string marshalling into fixed buffers, enumeration
//! conversions and, on Windows, the Toolhelp32 walker.

pub mod error;

pub use error::{AbiError, AbiResult};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
