//! Windows ABI definitions
//!
//! Type aliases, constant tables and `#[repr(C)]` records that mirror the
//! Windows SDK. The definitions are plain data and build on every target;
//! only [`snapshot`] talks to the OS and is compiled on Windows alone.

pub mod consts;
pub mod types;
pub mod utils;

#[cfg(windows)]
pub mod snapshot;

// Re-export commonly used records
pub use types::{
    Toolhelp32Entry, MODULEENTRY32, MODULEINFO, PROCESSENTRY32W, THREADENTRY32,
};

#[cfg(windows)]
pub use snapshot::Snapshot;
