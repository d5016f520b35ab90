//! Toolhelp32 snapshot records (`tlhelp32.h`)
//!
//! Callers must announce a record's size in `dwSize` before handing it to
//! `*32First`/`*32Next`; every `new()` here does that.

#![allow(non_camel_case_types, non_snake_case)]

use super::{DWORD, HANDLE, LONG, MAX_MODULE_NAME32, MAX_PATH, ULONG_PTR};
use crate::core::{AbiError, AbiResult};
use crate::windows::utils::string_conv::{copy_to_wide_buffer, wide_to_string};
use std::mem::size_of;
use std::ptr;

pub const TH32CS_SNAPHEAPLIST: DWORD = 0x0000_0001;
pub const TH32CS_SNAPPROCESS: DWORD = 0x0000_0002;
pub const TH32CS_SNAPTHREAD: DWORD = 0x0000_0004;
pub const TH32CS_SNAPMODULE: DWORD = 0x0000_0008;
pub const TH32CS_SNAPMODULE32: DWORD = 0x0000_0010;
pub const TH32CS_SNAPALL: DWORD =
    TH32CS_SNAPHEAPLIST | TH32CS_SNAPPROCESS | TH32CS_SNAPTHREAD | TH32CS_SNAPMODULE;
pub const TH32CS_INHERIT: DWORD = 0x8000_0000;

/// Common surface of the self-sizing Toolhelp32 records
pub trait Toolhelp32Entry: Copy {
    /// Record name as spelled in the SDK
    const NAME: &'static str;

    /// True in-memory size the OS expects in `dwSize`
    const SIZE: DWORD;

    /// Zeroed record with `dwSize` pre-filled
    fn sized() -> Self;

    /// Size currently announced in `dwSize`
    fn declared_size(&self) -> DWORD;

    /// Fails unless `dwSize` matches the record's true size
    fn check_size(&self) -> AbiResult<()> {
        let declared = self.declared_size();
        if declared == Self::SIZE {
            Ok(())
        } else {
            Err(AbiError::SizeMismatch {
                record: Self::NAME,
                declared,
                expected: Self::SIZE,
            })
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct THREADENTRY32 {
    pub dwSize: DWORD,
    pub cntUsage: DWORD,
    pub th32ThreadID: DWORD,
    pub th32OwnerProcessID: DWORD,
    pub tpBasePri: LONG,
    pub tpDeltaPri: LONG,
    pub dwFlags: DWORD,
}

pub type LPTHREADENTRY32 = *mut THREADENTRY32;
pub type LPCTHREADENTRY32 = *const THREADENTRY32;

impl THREADENTRY32 {
    pub const fn new() -> Self {
        THREADENTRY32 {
            dwSize: size_of::<THREADENTRY32>() as DWORD,
            cntUsage: 0,
            th32ThreadID: 0,
            th32OwnerProcessID: 0,
            tpBasePri: 0,
            tpDeltaPri: 0,
            dwFlags: 0,
        }
    }
}

impl Default for THREADENTRY32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Toolhelp32Entry for THREADENTRY32 {
    const NAME: &'static str = "THREADENTRY32";
    const SIZE: DWORD = size_of::<THREADENTRY32>() as DWORD;

    fn sized() -> Self {
        Self::new()
    }

    fn declared_size(&self) -> DWORD {
        self.dwSize
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PROCESSENTRY32W {
    pub dwSize: DWORD,
    pub cntUsage: DWORD,
    pub th32ProcessID: DWORD,
    pub th32DefaultHeapID: ULONG_PTR,
    pub th32ModuleID: DWORD,
    pub cntThreads: DWORD,
    pub th32ParentProcessID: DWORD,
    pub pcPriClassBase: LONG,
    pub dwFlags: DWORD,
    pub szExeFile: [u16; MAX_PATH],
}

pub type LPPROCESSENTRY32W = *mut PROCESSENTRY32W;
pub type LPCPROCESSENTRY32W = *const PROCESSENTRY32W;

impl PROCESSENTRY32W {
    pub const fn new() -> Self {
        PROCESSENTRY32W {
            dwSize: size_of::<PROCESSENTRY32W>() as DWORD,
            cntUsage: 0,
            th32ProcessID: 0,
            th32DefaultHeapID: 0,
            th32ModuleID: 0,
            cntThreads: 0,
            th32ParentProcessID: 0,
            pcPriClassBase: 0,
            dwFlags: 0,
            szExeFile: [0; MAX_PATH],
        }
    }

    /// Executable file name, decoded up to the first NUL
    pub fn exe_file(&self) -> String {
        wide_to_string(&self.szExeFile)
    }

    pub fn set_exe_file(&mut self, name: &str) -> AbiResult<()> {
        copy_to_wide_buffer(name, &mut self.szExeFile).map(|_| ())
    }
}

impl Default for PROCESSENTRY32W {
    fn default() -> Self {
        Self::new()
    }
}

impl Toolhelp32Entry for PROCESSENTRY32W {
    const NAME: &'static str = "PROCESSENTRY32W";
    const SIZE: DWORD = size_of::<PROCESSENTRY32W>() as DWORD;

    fn sized() -> Self {
        Self::new()
    }

    fn declared_size(&self) -> DWORD {
        self.dwSize
    }
}

/// Loaded-module record in its wide (`MODULEENTRY32W`) layout
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MODULEENTRY32 {
    pub dwSize: DWORD,
    pub th32ModuleID: DWORD,
    pub th32ProcessID: DWORD,
    pub GlblcntUsage: DWORD,
    pub ProccntUsage: DWORD,
    pub modBaseAddr: *mut u8,
    pub modBaseSize: DWORD,
    pub hModule: HANDLE,
    pub szModule: [u16; MAX_MODULE_NAME32 + 1],
    pub szExePath: [u16; MAX_PATH],
}

pub type MODULEENTRY32W = MODULEENTRY32;
pub type LPMODULEENTRY32 = *mut MODULEENTRY32;
pub type LPCMODULEENTRY32 = *const MODULEENTRY32;

impl MODULEENTRY32 {
    pub const fn new() -> Self {
        MODULEENTRY32 {
            dwSize: size_of::<MODULEENTRY32>() as DWORD,
            th32ModuleID: 0,
            th32ProcessID: 0,
            GlblcntUsage: 0,
            ProccntUsage: 0,
            modBaseAddr: ptr::null_mut(),
            modBaseSize: 0,
            hModule: ptr::null_mut(),
            szModule: [0; MAX_MODULE_NAME32 + 1],
            szExePath: [0; MAX_PATH],
        }
    }

    pub fn module_name(&self) -> String {
        wide_to_string(&self.szModule)
    }

    pub fn exe_path(&self) -> String {
        wide_to_string(&self.szExePath)
    }

    pub fn set_module_name(&mut self, name: &str) -> AbiResult<()> {
        copy_to_wide_buffer(name, &mut self.szModule).map(|_| ())
    }

    pub fn set_exe_path(&mut self, path: &str) -> AbiResult<()> {
        copy_to_wide_buffer(path, &mut self.szExePath).map(|_| ())
    }

    pub fn base_address(&self) -> usize {
        self.modBaseAddr as usize
    }

    /// Check if an address falls inside the module image
    pub fn contains_address(&self, addr: usize) -> bool {
        let base = self.base_address();
        addr >= base && addr - base < self.modBaseSize as usize
    }
}

impl Default for MODULEENTRY32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Toolhelp32Entry for MODULEENTRY32 {
    const NAME: &'static str = "MODULEENTRY32";
    const SIZE: DWORD = size_of::<MODULEENTRY32>() as DWORD;

    fn sized() -> Self {
        Self::new()
    }

    fn declared_size(&self) -> DWORD {
        self.dwSize
    }
}
