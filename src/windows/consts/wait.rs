//! Wait results, timeouts and status codes (`winbase.h`, `ntstatus.h`)

use crate::windows::types::{DWORD, NTSTATUS};

pub const IGNORE: DWORD = 0;
pub const INFINITE: DWORD = 0xFFFF_FFFF;

pub const WAIT_OBJECT_0: DWORD = 0x0000_0000;
pub const WAIT_ABANDONED: DWORD = 0x0000_0080;
pub const WAIT_TIMEOUT: DWORD = 0x0000_0102;
pub const WAIT_FAILED: DWORD = 0xFFFF_FFFF;
pub const MAXIMUM_WAIT_OBJECTS: DWORD = 64;

pub const STATUS_SUCCESS: NTSTATUS = 0x0000_0000;
pub const STATUS_PENDING: NTSTATUS = 0x0000_0103;

/// Exit code reported by `GetExitCodeProcess` while the process runs
pub const STILL_ACTIVE: DWORD = STATUS_PENDING as DWORD;
