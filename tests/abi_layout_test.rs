//! Integration tests for record sizes, self-sizing constructors and layouts

use kernel32_abi::inspect::layout;
use kernel32_abi::windows::types::{MAX_MODULE_NAME32, MAX_PATH};
use kernel32_abi::{
    AppMemoryInformation, ProcessMemoryExhaustionInfo, Toolhelp32Entry, MODULEENTRY32, MODULEINFO,
    PROCESSENTRY32W, THREADENTRY32,
};
use pretty_assertions::assert_eq;
use std::mem::size_of;

fn assert_self_sized<T: Toolhelp32Entry>() {
    let entry = T::sized();
    assert_eq!(entry.declared_size() as usize, size_of::<T>(), "{}", T::NAME);
    assert_eq!(T::SIZE as usize, size_of::<T>(), "{}", T::NAME);
    assert!(entry.check_size().is_ok());
}

#[test]
fn test_toolhelp_records_are_self_sized() {
    assert_self_sized::<THREADENTRY32>();
    assert_self_sized::<PROCESSENTRY32W>();
    assert_self_sized::<MODULEENTRY32>();
}

#[test]
fn test_fixed_buffers() {
    let process = PROCESSENTRY32W::new();
    assert_eq!(process.szExeFile.len(), MAX_PATH);
    assert!(process.szExeFile.iter().all(|&c| c == 0));

    let module = MODULEENTRY32::new();
    assert_eq!(module.szModule.len(), MAX_MODULE_NAME32 + 1);
    assert_eq!(module.szExePath.len(), MAX_PATH);
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_native_sizes_64() {
    let sizes: Vec<(&str, usize)> = layout::all().iter().map(|l| (l.name, l.size)).collect();
    assert_eq!(
        sizes,
        vec![
            ("THREADENTRY32", 28),
            ("PROCESSENTRY32W", 568),
            ("MODULEENTRY32", 1080),
            ("MODULEINFO", 24),
            ("ProcessMemoryExhaustionInfo", 16),
            ("AppMemoryInformation", 32),
        ]
    );
}

#[test]
#[cfg(target_pointer_width = "32")]
fn test_native_sizes_32() {
    assert_eq!(size_of::<THREADENTRY32>(), 28);
    assert_eq!(size_of::<PROCESSENTRY32W>(), 556);
    assert_eq!(size_of::<MODULEENTRY32>(), 1064);
    assert_eq!(size_of::<MODULEINFO>(), 12);
    assert_eq!(size_of::<ProcessMemoryExhaustionInfo>(), 12);
    assert_eq!(size_of::<AppMemoryInformation>(), 32);
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_module_entry_offsets_64() {
    let module = layout::find("MODULEENTRY32").unwrap();
    let offsets: Vec<(&str, usize)> = module.fields.iter().map(|f| (f.name, f.offset)).collect();
    assert_eq!(
        offsets,
        vec![
            ("dwSize", 0),
            ("th32ModuleID", 4),
            ("th32ProcessID", 8),
            ("GlblcntUsage", 12),
            ("ProccntUsage", 16),
            ("modBaseAddr", 24),
            ("modBaseSize", 32),
            ("hModule", 40),
            ("szModule", 48),
            ("szExePath", 560),
        ]
    );
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_process_entry_offsets_64() {
    let process = layout::find("PROCESSENTRY32W").unwrap();
    let offsets: Vec<(&str, usize)> = process.fields.iter().map(|f| (f.name, f.offset)).collect();
    assert_eq!(
        offsets,
        vec![
            ("dwSize", 0),
            ("cntUsage", 4),
            ("th32ProcessID", 8),
            ("th32DefaultHeapID", 16),
            ("th32ModuleID", 24),
            ("cntThreads", 28),
            ("th32ParentProcessID", 32),
            ("pcPriClassBase", 36),
            ("dwFlags", 40),
            ("szExeFile", 44),
        ]
    );
}

#[test]
fn test_entries_are_plain_copies() {
    let mut original = PROCESSENTRY32W::new();
    original.th32ProcessID = 4;
    original.set_exe_file("System").unwrap();

    let copy = original;
    original.set_exe_file("Idle").unwrap();

    assert_eq!(copy.exe_file(), "System");
    assert_eq!(copy.th32ProcessID, 4);
    assert_eq!(copy.dwSize, original.dwSize);
}

#[test]
fn test_thread_entry_survives_byte_view() {
    // Records are read back from raw OS buffers; reinterpret a byte image
    let mut entry = THREADENTRY32::new();
    entry.th32ThreadID = 0x1234;
    entry.th32OwnerProcessID = 0x42;
    entry.tpBasePri = -2;

    let bytes: [u8; 28] = unsafe { std::mem::transmute(entry) };
    assert_eq!(&bytes[0..4], &28u32.to_ne_bytes());
    assert_eq!(&bytes[8..12], &0x1234u32.to_ne_bytes());
    assert_eq!(&bytes[12..16], &0x42u32.to_ne_bytes());
    assert_eq!(&bytes[16..20], &(-2i32).to_ne_bytes());
}
