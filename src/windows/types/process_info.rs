//! Process information classes and the records passed to
//! `Get/SetProcessInformation` (`processthreadsapi.h`)

#![allow(non_snake_case)]

use super::{ULONG_PTR, USHORT};
use crate::core::{AbiError, AbiResult};
use serde::{Deserialize, Serialize};

/// Declares a `#[repr(u32)]` enumeration with lossless conversions to and
/// from its raw value
macro_rules! raw_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr,)+
        }
    ) => {
        $(#[$meta])*
        #[repr(u32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_u32(self) -> u32 {
                self as u32
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> u32 {
                value as u32
            }
        }

        impl TryFrom<u32> for $name {
            type Error = AbiError;

            fn try_from(raw: u32) -> AbiResult<Self> {
                $(if raw == $value {
                    return Ok($name::$variant);
                })+
                Err(AbiError::unknown_value(stringify!($name), raw))
            }
        }
    };
}

raw_enum! {
    /// `PROCESS_INFORMATION_CLASS`
    pub enum ProcessInformationClass {
        MemoryPriority = 0,
        MemoryExhaustionInfo = 1,
        AppMemoryInfo = 2,
        InPrivateInfo = 3,
        PowerThrottling = 4,
        ReservedValue1 = 5,
        TelemetryCoverageInfo = 6,
        ProtectionLevelInfo = 7,
        LeapSecondInfo = 8,
        MachineTypeInfo = 9,
        InformationClassMax = 10,
    }
}

raw_enum! {
    /// `PROTECTION_LEVEL_*` values carried by
    /// `PROCESS_PROTECTION_LEVEL_INFORMATION`
    pub enum ProcessProtectionLevel {
        WintcbLight = 0,
        Windows = 1,
        WindowsLight = 2,
        AntimalwareLight = 3,
        LsaLight = 4,
        Wintcb = 5,
        CodegenLight = 6,
        Authenticode = 7,
        PplApp = 8,
        None = 0xFFFF_FFFE,
    }
}

raw_enum! {
    /// `MEMORY_PRIORITY_*` values carried by `MEMORY_PRIORITY_INFORMATION`
    pub enum MemoryPriority {
        VeryLow = 1,
        Low = 2,
        Medium = 3,
        BelowNormal = 4,
        Normal = 5,
    }
}

raw_enum! {
    /// `PROCESS_MEMORY_EXHAUSTION_TYPE`
    pub enum ProcessMemoryExhaustionType {
        FailFastOnCommitFailure = 0,
        Max = 1,
    }
}

pub const PME_CURRENT_VERSION: USHORT = 1;
pub const PME_FAILFAST_ON_COMMIT_FAIL_DISABLE: ULONG_PTR = 0x0;
pub const PME_FAILFAST_ON_COMMIT_FAIL_ENABLE: ULONG_PTR = 0x1;

/// `PROCESS_MEMORY_EXHAUSTION_INFO`
///
/// `Type` stays a raw `u32` because the OS may hand back values this crate
/// does not know; use [`ProcessMemoryExhaustionInfo::exhaustion_type`].
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessMemoryExhaustionInfo {
    pub Version: USHORT,
    pub Reserved: USHORT,
    pub Type: u32,
    pub Value: ULONG_PTR,
}

impl ProcessMemoryExhaustionInfo {
    pub const fn new(kind: ProcessMemoryExhaustionType, value: ULONG_PTR) -> Self {
        ProcessMemoryExhaustionInfo {
            Version: PME_CURRENT_VERSION,
            Reserved: 0,
            Type: kind.as_u32(),
            Value: value,
        }
    }

    /// Fail-fast on commit failure, switched on or off
    pub const fn fail_fast_on_commit_failure(enable: bool) -> Self {
        let value = if enable {
            PME_FAILFAST_ON_COMMIT_FAIL_ENABLE
        } else {
            PME_FAILFAST_ON_COMMIT_FAIL_DISABLE
        };
        Self::new(ProcessMemoryExhaustionType::FailFastOnCommitFailure, value)
    }

    pub fn exhaustion_type(&self) -> AbiResult<ProcessMemoryExhaustionType> {
        ProcessMemoryExhaustionType::try_from(self.Type)
    }
}

/// `APP_MEMORY_INFORMATION`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMemoryInformation {
    pub AvailableCommit: u64,
    pub PrivateCommitUsage: u64,
    pub PeakPrivateCommitUsage: u64,
    pub TotalCommitUsage: u64,
}
