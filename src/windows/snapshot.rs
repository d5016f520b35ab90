//! Toolhelp32 snapshot walker driving the crate's own records

use crate::core::{AbiError, AbiResult};
use crate::windows::types::toolhelp::{
    TH32CS_SNAPMODULE, TH32CS_SNAPMODULE32, TH32CS_SNAPPROCESS, TH32CS_SNAPTHREAD,
};
use crate::windows::types::{Toolhelp32Entry, DWORD, MODULEENTRY32, PROCESSENTRY32W, THREADENTRY32};
use crate::windows::utils::string_conv::extract_filename;
use tracing::{debug, trace};
use winapi::shared::minwindef::FALSE;
use winapi::um::handleapi::{CloseHandle, INVALID_HANDLE_VALUE};
use winapi::um::tlhelp32::{
    CreateToolhelp32Snapshot, Module32FirstW, Module32NextW, Process32FirstW, Process32NextW,
    Thread32First, Thread32Next,
};
use winapi::um::winnt::HANDLE as RawHandle;

type StepFn<T> = fn(RawHandle, &mut T) -> bool;

/// Owned Toolhelp32 snapshot, closed on drop
pub struct Snapshot {
    handle: RawHandle,
    flags: DWORD,
    pid: DWORD,
}

impl Snapshot {
    /// Take a snapshot with `TH32CS_*` flags; `pid` 0 means the caller
    pub fn new(flags: DWORD, pid: DWORD) -> AbiResult<Self> {
        let handle = unsafe { CreateToolhelp32Snapshot(flags, pid) };
        if handle.is_null() || handle == INVALID_HANDLE_VALUE {
            return Err(AbiError::last_os_error());
        }

        debug!(flags, pid, "created Toolhelp32 snapshot");
        Ok(Snapshot { handle, flags, pid })
    }

    /// Processes and threads of the whole system
    pub fn system() -> AbiResult<Self> {
        Self::new(TH32CS_SNAPPROCESS | TH32CS_SNAPTHREAD, 0)
    }

    /// Modules of one process, 32-bit ones included
    pub fn modules_of(pid: DWORD) -> AbiResult<Self> {
        Self::new(TH32CS_SNAPMODULE | TH32CS_SNAPMODULE32, pid)
    }

    pub fn flags(&self) -> DWORD {
        self.flags
    }

    pub fn pid(&self) -> DWORD {
        self.pid
    }

    pub fn processes(&self) -> Entries<'_, PROCESSENTRY32W> {
        Entries::new(self, process_first, process_next)
    }

    pub fn threads(&self) -> Entries<'_, THREADENTRY32> {
        Entries::new(self, thread_first, thread_next)
    }

    pub fn modules(&self) -> Entries<'_, MODULEENTRY32> {
        Entries::new(self, module_first, module_next)
    }

    /// Find the first process whose executable name matches (case-insensitive)
    ///
    /// Only the file name is compared, so `name` may also be a full path.
    pub fn find_process(&self, name: &str) -> Option<PROCESSENTRY32W> {
        let wanted = extract_filename(name);
        self.processes()
            .find(|entry| extract_filename(&entry.exe_file()).eq_ignore_ascii_case(wanted))
    }
}

impl Drop for Snapshot {
    fn drop(&mut self) {
        // Ignore errors on cleanup
        unsafe {
            let _ = CloseHandle(self.handle);
        }
        debug!(pid = self.pid, "closed Toolhelp32 snapshot");
    }
}

/// Iterator over one record kind of a snapshot
pub struct Entries<'a, T: Toolhelp32Entry> {
    snapshot: &'a Snapshot,
    first: StepFn<T>,
    next: StepFn<T>,
    started: bool,
    done: bool,
}

impl<'a, T: Toolhelp32Entry> Entries<'a, T> {
    fn new(snapshot: &'a Snapshot, first: StepFn<T>, next: StepFn<T>) -> Self {
        Entries {
            snapshot,
            first,
            next,
            started: false,
            done: false,
        }
    }
}

impl<T: Toolhelp32Entry> Iterator for Entries<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }

        let mut entry = T::sized();
        let step = if self.started { self.next } else { self.first };
        self.started = true;

        if !step(self.snapshot.handle, &mut entry) {
            trace!(record = T::NAME, "snapshot exhausted");
            self.done = true;
            return None;
        }
        Some(entry)
    }
}

fn process_first(handle: RawHandle, entry: &mut PROCESSENTRY32W) -> bool {
    unsafe { Process32FirstW(handle, entry as *mut PROCESSENTRY32W as *mut _) != FALSE }
}

fn process_next(handle: RawHandle, entry: &mut PROCESSENTRY32W) -> bool {
    unsafe { Process32NextW(handle, entry as *mut PROCESSENTRY32W as *mut _) != FALSE }
}

fn thread_first(handle: RawHandle, entry: &mut THREADENTRY32) -> bool {
    unsafe { Thread32First(handle, entry as *mut THREADENTRY32 as *mut _) != FALSE }
}

fn thread_next(handle: RawHandle, entry: &mut THREADENTRY32) -> bool {
    unsafe { Thread32Next(handle, entry as *mut THREADENTRY32 as *mut _) != FALSE }
}

fn module_first(handle: RawHandle, entry: &mut MODULEENTRY32) -> bool {
    unsafe { Module32FirstW(handle, entry as *mut MODULEENTRY32 as *mut _) != FALSE }
}

fn module_next(handle: RawHandle, entry: &mut MODULEENTRY32) -> bool {
    unsafe { Module32NextW(handle, entry as *mut MODULEENTRY32 as *mut _) != FALSE }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process;

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_current_process_is_listed() {
        let snapshot = Snapshot::system().expect("Failed to create snapshot");
        let me = process::id();

        let entry = snapshot
            .processes()
            .find(|p| p.th32ProcessID == me)
            .expect("Current process missing from snapshot");
        assert!(entry.check_size().is_ok());
        assert!(!entry.exe_file().is_empty());
        assert!(entry.cntThreads >= 1);
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_find_process_by_name() {
        let snapshot = Snapshot::system().expect("Failed to create snapshot");
        assert_eq!(snapshot.flags(), TH32CS_SNAPPROCESS | TH32CS_SNAPTHREAD);
        assert_eq!(snapshot.pid(), 0);

        let exe = std::env::current_exe().expect("No current executable");
        let name = exe.file_name().unwrap().to_string_lossy().to_uppercase();

        let entry = snapshot.find_process(&name).expect("Process not found by name");
        assert!(entry.exe_file().eq_ignore_ascii_case(&name));

        let by_path = snapshot
            .find_process(&exe.to_string_lossy())
            .expect("Process not found by full path");
        assert_eq!(by_path.th32ProcessID, entry.th32ProcessID);
        assert!(snapshot.find_process("no-such-process.exe").is_none());
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_current_process_threads() {
        let snapshot = Snapshot::system().expect("Failed to create snapshot");
        let me = process::id();

        let count = snapshot
            .threads()
            .filter(|t| t.th32OwnerProcessID == me)
            .count();
        assert!(count >= 1);
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_current_process_modules() {
        let snapshot = Snapshot::modules_of(process::id()).expect("Failed to create snapshot");

        let modules: Vec<MODULEENTRY32> = snapshot.modules().collect();
        assert!(!modules.is_empty());
        assert!(modules
            .iter()
            .any(|m| m.module_name().eq_ignore_ascii_case("kernel32.dll")));
        assert!(modules.iter().all(|m| m.modBaseSize > 0));
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_exhausted_iterator_stays_exhausted() {
        let snapshot = Snapshot::modules_of(process::id()).expect("Failed to create snapshot");
        let mut modules = snapshot.modules();
        while modules.next().is_some() {}
        assert!(modules.next().is_none());
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_invalid_pid_fails() {
        // PID 0xFFFFFFFF never names a live process
        let result = Snapshot::modules_of(u32::MAX);
        assert!(matches!(result, Err(AbiError::WindowsApiError(_))));
    }
}
