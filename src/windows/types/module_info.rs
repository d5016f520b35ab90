//! `MODULEINFO` as filled by `GetModuleInformation` (`psapi.h`)

#![allow(non_snake_case)]

use super::{DWORD, LPVOID};
use std::fmt;
use std::ptr;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MODULEINFO {
    pub lpBaseOfDll: LPVOID,
    /// Size of the image mapped in memory. Computing it from the image file
    /// means summing all section sizes rounded up to the page size, plus one
    /// page for the PE header.
    pub SizeOfImage: DWORD,
    pub EntryPoint: LPVOID,
}

impl MODULEINFO {
    pub const fn new() -> Self {
        MODULEINFO {
            lpBaseOfDll: ptr::null_mut(),
            SizeOfImage: 0,
            EntryPoint: ptr::null_mut(),
        }
    }

    pub fn base_address(&self) -> usize {
        self.lpBaseOfDll as usize
    }

    /// First address past the image, `None` when it would pass the top of
    /// the address space
    pub fn end_address(&self) -> Option<usize> {
        self.base_address().checked_add(self.SizeOfImage as usize)
    }

    /// Check if an address is within this module
    pub fn contains_address(&self, addr: usize) -> bool {
        let base = self.base_address();
        addr >= base && addr - base < self.SizeOfImage as usize
    }

    /// Entry point relative to the image base
    pub fn entry_point_rva(&self) -> usize {
        (self.EntryPoint as usize).wrapping_sub(self.base_address())
    }
}

impl Default for MODULEINFO {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MODULEINFO {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LpBaseOfDll: 0x{:016x} SizeOfImage: {} Entrypoint: 0x{:016x} Entrypoint (relative to base): 0x{:08x}",
            self.base_address(),
            self.SizeOfImage,
            self.EntryPoint as usize,
            self.entry_point_rva()
        )
    }
}
