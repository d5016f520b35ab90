//! Access-rights masks for kernel objects (`winnt.h`)

use crate::windows::types::DWORD;

// Standard rights
pub const DELETE: DWORD = 0x0001_0000;
pub const READ_CONTROL: DWORD = 0x0002_0000;
pub const WRITE_DAC: DWORD = 0x0004_0000;
pub const WRITE_OWNER: DWORD = 0x0008_0000;
pub const SYNCHRONIZE: DWORD = 0x0010_0000;

pub const STANDARD_RIGHTS_REQUIRED: DWORD = 0x000F_0000;
pub const STANDARD_RIGHTS_READ: DWORD = READ_CONTROL;
pub const STANDARD_RIGHTS_WRITE: DWORD = READ_CONTROL;
pub const STANDARD_RIGHTS_EXECUTE: DWORD = READ_CONTROL;
pub const STANDARD_RIGHTS_ALL: DWORD = 0x001F_0000;
pub const SPECIFIC_RIGHTS_ALL: DWORD = 0x0000_FFFF;

pub const ACCESS_SYSTEM_SECURITY: DWORD = 0x0100_0000;
pub const MAXIMUM_ALLOWED: DWORD = 0x0200_0000;

// Generic rights
pub const GENERIC_READ: DWORD = 0x8000_0000;
pub const GENERIC_WRITE: DWORD = 0x4000_0000;
pub const GENERIC_EXECUTE: DWORD = 0x2000_0000;
pub const GENERIC_ALL: DWORD = 0x1000_0000;

// Process access rights
pub const PROCESS_TERMINATE: DWORD = 0x0001;
pub const PROCESS_CREATE_THREAD: DWORD = 0x0002;
pub const PROCESS_SET_SESSIONID: DWORD = 0x0004;
pub const PROCESS_VM_OPERATION: DWORD = 0x0008;
pub const PROCESS_VM_READ: DWORD = 0x0010;
pub const PROCESS_VM_WRITE: DWORD = 0x0020;
pub const PROCESS_DUP_HANDLE: DWORD = 0x0040;
pub const PROCESS_CREATE_PROCESS: DWORD = 0x0080;
pub const PROCESS_SET_QUOTA: DWORD = 0x0100;
pub const PROCESS_SET_INFORMATION: DWORD = 0x0200;
pub const PROCESS_QUERY_INFORMATION: DWORD = 0x0400;
pub const PROCESS_SUSPEND_RESUME: DWORD = 0x0800;
/// Granted implicitly with `PROCESS_QUERY_INFORMATION`
pub const PROCESS_QUERY_LIMITED_INFORMATION: DWORD = 0x1000;
pub const PROCESS_ALL_ACCESS: DWORD = STANDARD_RIGHTS_REQUIRED | SYNCHRONIZE | 0xFFFF;
/// `PROCESS_ALL_ACCESS` as defined before Windows Vista; XP and Server 2003
/// reject the modern value.
pub const PROCESS_ALL_ACCESS_LEGACY: DWORD = STANDARD_RIGHTS_REQUIRED | SYNCHRONIZE | 0x0FFF;

// Thread access rights
pub const THREAD_TERMINATE: DWORD = 0x0001;
pub const THREAD_SUSPEND_RESUME: DWORD = 0x0002;
pub const THREAD_GET_CONTEXT: DWORD = 0x0008;
pub const THREAD_SET_CONTEXT: DWORD = 0x0010;
pub const THREAD_SET_INFORMATION: DWORD = 0x0020;
pub const THREAD_QUERY_INFORMATION: DWORD = 0x0040;
pub const THREAD_SET_THREAD_TOKEN: DWORD = 0x0080;
pub const THREAD_IMPERSONATE: DWORD = 0x0100;
pub const THREAD_DIRECT_IMPERSONATION: DWORD = 0x0200;
pub const THREAD_SET_LIMITED_INFORMATION: DWORD = 0x0400;
pub const THREAD_QUERY_LIMITED_INFORMATION: DWORD = 0x0800;
pub const THREAD_ALL_ACCESS: DWORD = STANDARD_RIGHTS_REQUIRED | SYNCHRONIZE | 0xFFFF;

// Registry key rights
pub const KEY_QUERY_VALUE: DWORD = 0x0001;
pub const KEY_SET_VALUE: DWORD = 0x0002;
pub const KEY_CREATE_SUB_KEY: DWORD = 0x0004;
pub const KEY_ENUMERATE_SUB_KEYS: DWORD = 0x0008;
pub const KEY_NOTIFY: DWORD = 0x0010;
pub const KEY_CREATE_LINK: DWORD = 0x0020;
pub const KEY_WOW64_64KEY: DWORD = 0x0100;
pub const KEY_WOW64_32KEY: DWORD = 0x0200;
pub const KEY_WOW64_RES: DWORD = 0x0300;

pub const KEY_READ: DWORD =
    (STANDARD_RIGHTS_READ | KEY_QUERY_VALUE | KEY_ENUMERATE_SUB_KEYS | KEY_NOTIFY) & !SYNCHRONIZE;
pub const KEY_WRITE: DWORD = (STANDARD_RIGHTS_WRITE | KEY_SET_VALUE | KEY_CREATE_SUB_KEY) & !SYNCHRONIZE;
pub const KEY_EXECUTE: DWORD = KEY_READ & !SYNCHRONIZE;
pub const KEY_ALL_ACCESS: DWORD = (STANDARD_RIGHTS_ALL
    | KEY_QUERY_VALUE
    | KEY_SET_VALUE
    | KEY_CREATE_SUB_KEY
    | KEY_ENUMERATE_SUB_KEYS
    | KEY_NOTIFY
    | KEY_CREATE_LINK)
    & !SYNCHRONIZE;
