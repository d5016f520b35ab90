//! Named table of every constant the crate exports
//!
//! Entries are generated from the constants themselves, so a value here can
//! never drift from the one callers link against.

use crate::core::{AbiError, AbiResult};
use crate::windows::consts::*;
use crate::windows::types::process_info::{
    PME_CURRENT_VERSION, PME_FAILFAST_ON_COMMIT_FAIL_DISABLE, PME_FAILFAST_ON_COMMIT_FAIL_ENABLE,
};
use crate::windows::types::toolhelp::*;
use crate::windows::types::{FALSE, INVALID_HANDLE, MAX_MODULE_NAME32, MAX_PATH, NULL, TRUE};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Family a constant belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    Base,
    StandardAccess,
    ProcessAccess,
    ThreadAccess,
    RegistryKey,
    ProcessCreation,
    ThreadPriority,
    MemoryAllocation,
    PageProtection,
    Service,
    Wait,
    Status,
    Toolhelp,
    MemoryExhaustion,
}

impl Group {
    pub const ALL: &'static [Group] = &[
        Group::Base,
        Group::StandardAccess,
        Group::ProcessAccess,
        Group::ThreadAccess,
        Group::RegistryKey,
        Group::ProcessCreation,
        Group::ThreadPriority,
        Group::MemoryAllocation,
        Group::PageProtection,
        Group::Service,
        Group::Wait,
        Group::Status,
        Group::Toolhelp,
        Group::MemoryExhaustion,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Group::Base => "base",
            Group::StandardAccess => "standard_access",
            Group::ProcessAccess => "process_access",
            Group::ThreadAccess => "thread_access",
            Group::RegistryKey => "registry_key",
            Group::ProcessCreation => "process_creation",
            Group::ThreadPriority => "thread_priority",
            Group::MemoryAllocation => "memory_allocation",
            Group::PageProtection => "page_protection",
            Group::Service => "service",
            Group::Wait => "wait",
            Group::Status => "status",
            Group::Toolhelp => "toolhelp",
            Group::MemoryExhaustion => "memory_exhaustion",
        }
    }

    /// Whether values of this group combine as bit flags
    pub const fn is_bitmask(self) -> bool {
        !matches!(
            self,
            Group::Base
                | Group::ThreadPriority
                | Group::Wait
                | Group::Status
                | Group::MemoryExhaustion
        )
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Group {
    type Err = AbiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_").to_ascii_lowercase();
        Group::ALL
            .iter()
            .copied()
            .find(|g| g.name() == wanted)
            .ok_or_else(|| AbiError::UnknownGroup(s.to_string()))
    }
}

/// One named constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Constant {
    pub name: &'static str,
    pub group: Group,
    pub value: i64,
}

impl Constant {
    /// Raw 32-bit pattern, as passed to the API
    pub const fn bits(&self) -> u32 {
        self.value as u32
    }

    pub const fn is_single_bit(&self) -> bool {
        self.value > 0 && self.bits().count_ones() == 1
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} ({:#x})", self.name, self.value, self.bits())
    }
}

macro_rules! constants {
    ($($group:ident => [$($name:ident),* $(,)?]),* $(,)?) => {
        &[$($(Constant {
            name: stringify!($name),
            group: Group::$group,
            value: $name as i64,
        },)*)*]
    };
}

pub static CONSTANTS: &[Constant] = constants! {
    Base => [NULL, FALSE, TRUE, INVALID_HANDLE, MAX_PATH, MAX_MODULE_NAME32],
    StandardAccess => [
        DELETE,
        READ_CONTROL,
        WRITE_DAC,
        WRITE_OWNER,
        SYNCHRONIZE,
        STANDARD_RIGHTS_REQUIRED,
        STANDARD_RIGHTS_READ,
        STANDARD_RIGHTS_WRITE,
        STANDARD_RIGHTS_EXECUTE,
        STANDARD_RIGHTS_ALL,
        SPECIFIC_RIGHTS_ALL,
        ACCESS_SYSTEM_SECURITY,
        MAXIMUM_ALLOWED,
        GENERIC_READ,
        GENERIC_WRITE,
        GENERIC_EXECUTE,
        GENERIC_ALL,
    ],
    ProcessAccess => [
        PROCESS_TERMINATE,
        PROCESS_CREATE_THREAD,
        PROCESS_SET_SESSIONID,
        PROCESS_VM_OPERATION,
        PROCESS_VM_READ,
        PROCESS_VM_WRITE,
        PROCESS_DUP_HANDLE,
        PROCESS_CREATE_PROCESS,
        PROCESS_SET_QUOTA,
        PROCESS_SET_INFORMATION,
        PROCESS_QUERY_INFORMATION,
        PROCESS_SUSPEND_RESUME,
        PROCESS_QUERY_LIMITED_INFORMATION,
        PROCESS_ALL_ACCESS,
        PROCESS_ALL_ACCESS_LEGACY,
    ],
    ThreadAccess => [
        THREAD_TERMINATE,
        THREAD_SUSPEND_RESUME,
        THREAD_GET_CONTEXT,
        THREAD_SET_CONTEXT,
        THREAD_SET_INFORMATION,
        THREAD_QUERY_INFORMATION,
        THREAD_SET_THREAD_TOKEN,
        THREAD_IMPERSONATE,
        THREAD_DIRECT_IMPERSONATION,
        THREAD_SET_LIMITED_INFORMATION,
        THREAD_QUERY_LIMITED_INFORMATION,
        THREAD_ALL_ACCESS,
    ],
    RegistryKey => [
        KEY_QUERY_VALUE,
        KEY_SET_VALUE,
        KEY_CREATE_SUB_KEY,
        KEY_ENUMERATE_SUB_KEYS,
        KEY_NOTIFY,
        KEY_CREATE_LINK,
        KEY_WOW64_64KEY,
        KEY_WOW64_32KEY,
        KEY_WOW64_RES,
        KEY_READ,
        KEY_WRITE,
        KEY_EXECUTE,
        KEY_ALL_ACCESS,
    ],
    ProcessCreation => [
        DEBUG_PROCESS,
        DEBUG_ONLY_THIS_PROCESS,
        CREATE_SUSPENDED,
        DETACHED_PROCESS,
        CREATE_NEW_CONSOLE,
        NORMAL_PRIORITY_CLASS,
        IDLE_PRIORITY_CLASS,
        HIGH_PRIORITY_CLASS,
        REALTIME_PRIORITY_CLASS,
        CREATE_NEW_PROCESS_GROUP,
        CREATE_UNICODE_ENVIRONMENT,
        CREATE_SEPARATE_WOW_VDM,
        CREATE_SHARED_WOW_VDM,
        CREATE_FORCEDOS,
        BELOW_NORMAL_PRIORITY_CLASS,
        ABOVE_NORMAL_PRIORITY_CLASS,
        INHERIT_PARENT_AFFINITY,
        INHERIT_CALLER_PRIORITY,
        CREATE_PROTECTED_PROCESS,
        EXTENDED_STARTUPINFO_PRESENT,
        PROCESS_MODE_BACKGROUND_BEGIN,
        PROCESS_MODE_BACKGROUND_END,
        CREATE_BREAKAWAY_FROM_JOB,
        CREATE_PRESERVE_CODE_AUTHZ_LEVEL,
        CREATE_DEFAULT_ERROR_MODE,
        CREATE_NO_WINDOW,
        PROFILE_USER,
        PROFILE_KERNEL,
        PROFILE_SERVER,
        CREATE_IGNORE_SYSTEM_DEFAULT,
    ],
    ThreadPriority => [
        THREAD_BASE_PRIORITY_LOWRT,
        THREAD_BASE_PRIORITY_MAX,
        THREAD_BASE_PRIORITY_MIN,
        THREAD_BASE_PRIORITY_IDLE,
        THREAD_PRIORITY_LOWEST,
        THREAD_PRIORITY_BELOW_NORMAL,
        THREAD_PRIORITY_NORMAL,
        THREAD_PRIORITY_HIGHEST,
        THREAD_PRIORITY_ABOVE_NORMAL,
        THREAD_PRIORITY_ERROR_RETURN,
        THREAD_PRIORITY_TIME_CRITICAL,
        THREAD_PRIORITY_IDLE,
        MAXLONG,
    ],
    MemoryAllocation => [
        MEM_COMMIT,
        MEM_RESERVE,
        MEM_DECOMMIT,
        MEM_RELEASE,
        MEM_FREE,
        MEM_PRIVATE,
        MEM_MAPPED,
        MEM_RESET,
        MEM_TOP_DOWN,
        MEM_WRITE_WATCH,
        MEM_PHYSICAL,
        MEM_ROTATE,
        MEM_LARGE_PAGES,
        MEM_4MB_PAGES,
    ],
    PageProtection => [
        PAGE_NOACCESS,
        PAGE_READONLY,
        PAGE_READWRITE,
        PAGE_WRITECOPY,
        PAGE_EXECUTE,
        PAGE_EXECUTE_READ,
        PAGE_EXECUTE_READWRITE,
        PAGE_EXECUTE_WRITECOPY,
        PAGE_GUARD,
        PAGE_NOCACHE,
        PAGE_WRITECOMBINE,
        PAGE_WRITABLE_MASK,
        PAGE_EXECUTABLE_MASK,
        PAGE_PROTECTION_MASK,
    ],
    Service => [
        SERVICE_KERNEL_DRIVER,
        SERVICE_FILE_SYSTEM_DRIVER,
        SERVICE_ADAPTER,
        SERVICE_RECOGNIZER_DRIVER,
        SERVICE_DRIVER,
        SERVICE_WIN32_OWN_PROCESS,
        SERVICE_WIN32_SHARE_PROCESS,
        SERVICE_WIN32,
        SERVICE_INTERACTIVE_PROCESS,
        SERVICE_TYPE_ALL,
    ],
    Wait => [
        IGNORE,
        INFINITE,
        WAIT_OBJECT_0,
        WAIT_ABANDONED,
        WAIT_TIMEOUT,
        WAIT_FAILED,
        MAXIMUM_WAIT_OBJECTS,
    ],
    Status => [STATUS_SUCCESS, STATUS_PENDING, STILL_ACTIVE],
    Toolhelp => [
        TH32CS_SNAPHEAPLIST,
        TH32CS_SNAPPROCESS,
        TH32CS_SNAPTHREAD,
        TH32CS_SNAPMODULE,
        TH32CS_SNAPMODULE32,
        TH32CS_SNAPALL,
        TH32CS_INHERIT,
    ],
    MemoryExhaustion => [
        PME_CURRENT_VERSION,
        PME_FAILFAST_ON_COMMIT_FAIL_DISABLE,
        PME_FAILFAST_ON_COMMIT_FAIL_ENABLE,
    ],
};

lazy_static! {
    static ref BY_NAME: HashMap<String, &'static Constant> = {
        let index: HashMap<String, &'static Constant> = CONSTANTS
            .iter()
            .map(|c| (c.name.to_ascii_uppercase(), c))
            .collect();
        debug!(count = index.len(), "indexed constant registry");
        index
    };
}

/// Look up a constant by name, ignoring case
pub fn lookup(name: &str) -> Option<&'static Constant> {
    BY_NAME.get(&name.trim().to_ascii_uppercase()).copied()
}

/// Like [`lookup`], failing with `AbiError::UnknownConstant`
pub fn require(name: &str) -> AbiResult<&'static Constant> {
    lookup(name).ok_or_else(|| AbiError::UnknownConstant(name.to_string()))
}

/// All constants of one group, in declaration order
pub fn group(group: Group) -> impl Iterator<Item = &'static Constant> {
    CONSTANTS.iter().filter(move |c| c.group == group)
}

/// Names of the group's constants equal to `value`
pub fn names_of(group: Group, value: i64) -> Vec<&'static str> {
    self::group(group)
        .filter(|c| c.value == value)
        .map(|c| c.name)
        .collect()
}

/// A bitmask split into named single-bit flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagSet {
    pub value: u32,
    pub names: Vec<&'static str>,
    /// Set bits no single-bit constant of the searched groups names
    pub unknown: u32,
}

impl FlagSet {
    pub fn is_fully_named(&self) -> bool {
        self.unknown == 0
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value == 0 {
            return f.write_str("0");
        }

        let mut parts: Vec<String> = self.names.iter().map(|n| n.to_string()).collect();
        if self.unknown != 0 {
            parts.push(format!("{:#x}", self.unknown));
        }
        f.write_str(&parts.join(" | "))
    }
}

/// Split `value` into the single-bit constants of `groups`
///
/// When several constants share a bit, the first declared one wins.
/// Composite constants (more than one bit) are never reported.
pub fn decompose(groups: &[Group], value: u32) -> FlagSet {
    let mut names = Vec::new();
    let mut covered = 0u32;

    for bit in (0..32).map(|shift| 1u32 << shift) {
        if value & bit == 0 {
            continue;
        }
        let named = CONSTANTS
            .iter()
            .find(|c| groups.contains(&c.group) && c.is_single_bit() && c.bits() == bit);
        if let Some(constant) = named {
            names.push(constant.name);
            covered |= bit;
        }
    }

    FlagSet {
        value,
        names,
        unknown: value & !covered,
    }
}
