//! Process creation flags, priority classes and thread priorities
//! (`winbase.h`, `winnt.h`)

use crate::windows::types::{DWORD, LONG};

// Process creation flags
pub const DEBUG_PROCESS: DWORD = 0x0000_0001;
pub const DEBUG_ONLY_THIS_PROCESS: DWORD = 0x0000_0002;
pub const CREATE_SUSPENDED: DWORD = 0x0000_0004;
pub const DETACHED_PROCESS: DWORD = 0x0000_0008;
pub const CREATE_NEW_CONSOLE: DWORD = 0x0000_0010;
pub const NORMAL_PRIORITY_CLASS: DWORD = 0x0000_0020;
pub const IDLE_PRIORITY_CLASS: DWORD = 0x0000_0040;
pub const HIGH_PRIORITY_CLASS: DWORD = 0x0000_0080;
pub const REALTIME_PRIORITY_CLASS: DWORD = 0x0000_0100;
pub const CREATE_NEW_PROCESS_GROUP: DWORD = 0x0000_0200;
pub const CREATE_UNICODE_ENVIRONMENT: DWORD = 0x0000_0400;
pub const CREATE_SEPARATE_WOW_VDM: DWORD = 0x0000_0800;
pub const CREATE_SHARED_WOW_VDM: DWORD = 0x0000_1000;
pub const CREATE_FORCEDOS: DWORD = 0x0000_2000;
pub const BELOW_NORMAL_PRIORITY_CLASS: DWORD = 0x0000_4000;
pub const ABOVE_NORMAL_PRIORITY_CLASS: DWORD = 0x0000_8000;
pub const INHERIT_PARENT_AFFINITY: DWORD = 0x0001_0000;
pub const INHERIT_CALLER_PRIORITY: DWORD = 0x0002_0000;
pub const CREATE_PROTECTED_PROCESS: DWORD = 0x0004_0000;
pub const EXTENDED_STARTUPINFO_PRESENT: DWORD = 0x0008_0000;
pub const PROCESS_MODE_BACKGROUND_BEGIN: DWORD = 0x0010_0000;
pub const PROCESS_MODE_BACKGROUND_END: DWORD = 0x0020_0000;
pub const CREATE_BREAKAWAY_FROM_JOB: DWORD = 0x0100_0000;
pub const CREATE_PRESERVE_CODE_AUTHZ_LEVEL: DWORD = 0x0200_0000;
pub const CREATE_DEFAULT_ERROR_MODE: DWORD = 0x0400_0000;
pub const CREATE_NO_WINDOW: DWORD = 0x0800_0000;
pub const PROFILE_USER: DWORD = 0x1000_0000;
pub const PROFILE_KERNEL: DWORD = 0x2000_0000;
pub const PROFILE_SERVER: DWORD = 0x4000_0000;
pub const CREATE_IGNORE_SYSTEM_DEFAULT: DWORD = 0x8000_0000;

pub const MAXLONG: LONG = 0x7FFF_FFFF;

// Thread base priorities
pub const THREAD_BASE_PRIORITY_LOWRT: LONG = 15;
pub const THREAD_BASE_PRIORITY_MAX: LONG = 2;
pub const THREAD_BASE_PRIORITY_MIN: LONG = -2;
pub const THREAD_BASE_PRIORITY_IDLE: LONG = -15;

// Thread priorities
pub const THREAD_PRIORITY_LOWEST: LONG = THREAD_BASE_PRIORITY_MIN;
pub const THREAD_PRIORITY_BELOW_NORMAL: LONG = THREAD_PRIORITY_LOWEST + 1;
pub const THREAD_PRIORITY_NORMAL: LONG = 0;
pub const THREAD_PRIORITY_HIGHEST: LONG = THREAD_BASE_PRIORITY_MAX;
pub const THREAD_PRIORITY_ABOVE_NORMAL: LONG = THREAD_PRIORITY_HIGHEST - 1;
pub const THREAD_PRIORITY_ERROR_RETURN: LONG = MAXLONG;
pub const THREAD_PRIORITY_TIME_CRITICAL: LONG = THREAD_BASE_PRIORITY_LOWRT;
pub const THREAD_PRIORITY_IDLE: LONG = THREAD_BASE_PRIORITY_IDLE;
