//! Field-level layout of the ABI records, read from the compiled types

use crate::windows::types::{
    AppMemoryInformation, ProcessMemoryExhaustionInfo, MODULEENTRY32, MODULEINFO, PROCESSENTRY32W,
    THREADENTRY32,
};
use serde::Serialize;
use std::mem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldLayout {
    pub name: &'static str,
    pub offset: usize,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub name: &'static str,
    pub size: usize,
    pub align: usize,
    pub fields: Vec<FieldLayout>,
}

impl Layout {
    pub fn field(&self, name: &str) -> Option<&FieldLayout> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Bytes taken by alignment padding, interior and trailing
    pub fn padding(&self) -> usize {
        self.size - self.fields.iter().map(|f| f.size).sum::<usize>()
    }
}

macro_rules! layout_of {
    ($ty:ident { $($field:ident),+ $(,)? }) => {{
        let record = <$ty>::default();
        Layout {
            name: stringify!($ty),
            size: mem::size_of::<$ty>(),
            align: mem::align_of::<$ty>(),
            fields: vec![$(FieldLayout {
                name: stringify!($field),
                offset: mem::offset_of!($ty, $field),
                size: mem::size_of_val(&record.$field),
            }),+],
        }
    }};
}

/// Layouts of every record, in header order
pub fn all() -> Vec<Layout> {
    vec![
        layout_of!(THREADENTRY32 {
            dwSize,
            cntUsage,
            th32ThreadID,
            th32OwnerProcessID,
            tpBasePri,
            tpDeltaPri,
            dwFlags,
        }),
        layout_of!(PROCESSENTRY32W {
            dwSize,
            cntUsage,
            th32ProcessID,
            th32DefaultHeapID,
            th32ModuleID,
            cntThreads,
            th32ParentProcessID,
            pcPriClassBase,
            dwFlags,
            szExeFile,
        }),
        layout_of!(MODULEENTRY32 {
            dwSize,
            th32ModuleID,
            th32ProcessID,
            GlblcntUsage,
            ProccntUsage,
            modBaseAddr,
            modBaseSize,
            hModule,
            szModule,
            szExePath,
        }),
        layout_of!(MODULEINFO {
            lpBaseOfDll,
            SizeOfImage,
            EntryPoint,
        }),
        layout_of!(ProcessMemoryExhaustionInfo {
            Version,
            Reserved,
            Type,
            Value,
        }),
        layout_of!(AppMemoryInformation {
            AvailableCommit,
            PrivateCommitUsage,
            PeakPrivateCommitUsage,
            TotalCommitUsage,
        }),
    ]
}

/// Layout of one record by name, ignoring case
pub fn find(name: &str) -> Option<Layout> {
    all()
        .into_iter()
        .find(|layout| layout.name.eq_ignore_ascii_case(name))
}
