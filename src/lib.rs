//! Kernel32-ABI: typed kernel32/Win32 constants and ABI-exact record layouts
//!
//! Every constant carries the exact value from the Windows SDK and every
//! record is `#[repr(C)]` with the field order and widths the OS expects, so
//! callers can hand them straight to Toolhelp32, PSAPI and process APIs.

pub mod config;
pub mod core;
pub mod inspect;
pub mod windows;

// Re-export main types
pub use crate::core::{AbiError, AbiResult};
pub use crate::windows::consts;
pub use crate::windows::types::{
    AppMemoryInformation, MemoryPriority, ProcessInformationClass, ProcessMemoryExhaustionInfo,
    ProcessMemoryExhaustionType, ProcessProtectionLevel, Toolhelp32Entry, MODULEENTRY32,
    MODULEINFO, PROCESSENTRY32W, THREADENTRY32,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_constants() {
        assert_eq!(crate::core::VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(crate::core::AUTHORS, env!("CARGO_PKG_AUTHORS"));
    }

    #[test]
    fn test_record_reexports() {
        assert!(THREADENTRY32::new().check_size().is_ok());
        assert!(PROCESSENTRY32W::new().check_size().is_ok());
        assert!(MODULEENTRY32::new().check_size().is_ok());
        assert!(MODULEINFO::new().lpBaseOfDll.is_null());
    }

    #[test]
    fn test_consts_reexport() {
        assert_eq!(consts::PROCESS_VM_READ, 0x10);
        assert_eq!(consts::PAGE_EXECUTE_READWRITE, 0x40);
    }

    #[test]
    fn test_error_reexport() {
        let result: AbiResult<u32> = Err(AbiError::UnknownConstant("X".to_string()));
        assert!(result.is_err());
    }
}
