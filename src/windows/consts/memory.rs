//! Memory allocation types and page protections (`winnt.h`)

use crate::windows::types::DWORD;

// Allocation types and region states
pub const MEM_COMMIT: DWORD = 0x0000_1000;
pub const MEM_RESERVE: DWORD = 0x0000_2000;
pub const MEM_DECOMMIT: DWORD = 0x0000_4000;
pub const MEM_RELEASE: DWORD = 0x0000_8000;
pub const MEM_FREE: DWORD = 0x0001_0000;
pub const MEM_PRIVATE: DWORD = 0x0002_0000;
pub const MEM_MAPPED: DWORD = 0x0004_0000;
pub const MEM_RESET: DWORD = 0x0008_0000;
pub const MEM_TOP_DOWN: DWORD = 0x0010_0000;
pub const MEM_WRITE_WATCH: DWORD = 0x0020_0000;
pub const MEM_PHYSICAL: DWORD = 0x0040_0000;
pub const MEM_ROTATE: DWORD = 0x0080_0000;
pub const MEM_LARGE_PAGES: DWORD = 0x2000_0000;
pub const MEM_4MB_PAGES: DWORD = 0x8000_0000;

// Page protections
pub const PAGE_NOACCESS: DWORD = 0x01;
pub const PAGE_READONLY: DWORD = 0x02;
pub const PAGE_READWRITE: DWORD = 0x04;
pub const PAGE_WRITECOPY: DWORD = 0x08;
pub const PAGE_EXECUTE: DWORD = 0x10;
pub const PAGE_EXECUTE_READ: DWORD = 0x20;
pub const PAGE_EXECUTE_READWRITE: DWORD = 0x40;
pub const PAGE_EXECUTE_WRITECOPY: DWORD = 0x80;
pub const PAGE_GUARD: DWORD = 0x100;
pub const PAGE_NOCACHE: DWORD = 0x200;
pub const PAGE_WRITECOMBINE: DWORD = 0x400;

/// Protections that allow writing, with or without copy-on-write
pub const PAGE_WRITABLE_MASK: DWORD =
    PAGE_READWRITE | PAGE_WRITECOPY | PAGE_EXECUTE_READWRITE | PAGE_EXECUTE_WRITECOPY;

/// Protections that allow executing
pub const PAGE_EXECUTABLE_MASK: DWORD =
    PAGE_EXECUTE | PAGE_EXECUTE_READ | PAGE_EXECUTE_READWRITE | PAGE_EXECUTE_WRITECOPY;

/// Low byte holding the access protection; higher bits are modifiers
pub const PAGE_PROTECTION_MASK: DWORD = 0xFF;

/// Check if a protection allows reads without faulting
pub const fn is_readable(protect: DWORD) -> bool {
    let base = protect & PAGE_PROTECTION_MASK;
    base != 0 && base != PAGE_NOACCESS && base != PAGE_EXECUTE && (protect & PAGE_GUARD) == 0
}

pub const fn is_writable(protect: DWORD) -> bool {
    (protect & PAGE_WRITABLE_MASK) != 0
}

pub const fn is_executable(protect: DWORD) -> bool {
    (protect & PAGE_EXECUTABLE_MASK) != 0
}
