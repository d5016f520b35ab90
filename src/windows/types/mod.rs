//! Windows primitive type aliases and fixed-layout records
//!
//! Aliases follow the widths published in the Windows SDK headers
//! (`windef.h`, `winnt.h`, `basetsd.h`), not the host platform's C types,
//! so the definitions stay ABI-exact when compiled elsewhere.

#![allow(non_camel_case_types)]

use std::ffi::c_void;

pub mod module_info;
pub mod process_info;
pub mod toolhelp;

// Re-export commonly used records
pub use module_info::MODULEINFO;
pub use process_info::{
    AppMemoryInformation, MemoryPriority, ProcessInformationClass, ProcessMemoryExhaustionInfo,
    ProcessMemoryExhaustionType, ProcessProtectionLevel,
};
pub use toolhelp::{Toolhelp32Entry, MODULEENTRY32, PROCESSENTRY32W, THREADENTRY32};

pub type BOOL = i32;
pub type BYTE = u8;
pub type BOOLEAN = BYTE;
pub type CHAR = i8;
pub type CCHAR = i8;
pub type WORD = u16;
pub type DWORD = u32;
pub type DWORD32 = u32;
pub type DWORD64 = u64;
pub type DWORDLONG = u64;
pub type COLORREF = DWORD;
pub type SHORT = i16;
pub type USHORT = u16;
pub type LONG = i32;
pub type ULONG = u32;
pub type LONGLONG = i64;
pub type ULONGLONG = u64;
pub type UINT = u32;
pub type WCHAR = u16;

pub type ULONG_PTR = usize;
pub type LONG_PTR = isize;
pub type SIZE_T = ULONG_PTR;
pub type KAFFINITY = ULONG_PTR;

pub type PVOID = *mut c_void;
pub type LPVOID = *mut c_void;
pub type LVOID = *mut c_void;
pub type LPCVOID = *const c_void;
pub type HANDLE = PVOID;
pub type HWND = HANDLE;
pub type PPEB = PVOID;
pub type PWSTR = *mut WCHAR;

pub type NTSTATUS = LONG;
pub type KPRIORITY = LONG;
pub type ACCESS_MASK = ULONG;

pub const NULL: ULONG_PTR = 0;
pub const FALSE: BOOL = 0;
pub const TRUE: BOOL = 1;

pub const INVALID_HANDLE: LONG_PTR = -1;
pub const INVALID_HANDLE_VALUE: HANDLE = INVALID_HANDLE as HANDLE;

/// Length in UTF-16 units of a path buffer
pub const MAX_PATH: usize = 260;
/// Longest module name a Toolhelp32 record can carry, without the terminator
pub const MAX_MODULE_NAME32: usize = 255;
