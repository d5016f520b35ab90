//! Service types (`winnt.h`)

use crate::windows::types::DWORD;

pub const SERVICE_KERNEL_DRIVER: DWORD = 0x0000_0001;
pub const SERVICE_FILE_SYSTEM_DRIVER: DWORD = 0x0000_0002;
pub const SERVICE_ADAPTER: DWORD = 0x0000_0004;
pub const SERVICE_RECOGNIZER_DRIVER: DWORD = 0x0000_0008;
pub const SERVICE_DRIVER: DWORD =
    SERVICE_KERNEL_DRIVER | SERVICE_FILE_SYSTEM_DRIVER | SERVICE_RECOGNIZER_DRIVER;

pub const SERVICE_WIN32_OWN_PROCESS: DWORD = 0x0000_0010;
pub const SERVICE_WIN32_SHARE_PROCESS: DWORD = 0x0000_0020;
pub const SERVICE_WIN32: DWORD = SERVICE_WIN32_OWN_PROCESS | SERVICE_WIN32_SHARE_PROCESS;

pub const SERVICE_INTERACTIVE_PROCESS: DWORD = 0x0000_0100;

pub const SERVICE_TYPE_ALL: DWORD =
    SERVICE_WIN32 | SERVICE_ADAPTER | SERVICE_DRIVER | SERVICE_INTERACTIVE_PROCESS;
