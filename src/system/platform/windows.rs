use std::collections::HashMap;
use std::io;

use windows_sys::Win32::{
    Foundation::{CloseHandle, INVALID_HANDLE_VALUE},
    System::{
        Diagnostics::ToolHelp::{
            CreateToolhelp32Snapshot, PROCESSENTRY32W, Process32FirstW, Process32NextW,
            TH32CS_SNAPPROCESS,
        },
        Threading::{
            GetPriorityClass, OpenProcess, PROCESS_QUERY_INFORMATION, PROCESS_TERMINATE,
            TerminateProcess,
        },
    },
};

use super::{PlatformExtensions, ProcessExtras, TerminateError};

const ERROR_INVALID_PARAMETER: i32 = 87;

pub struct Platform;

fn classify(err: io::Error) -> TerminateError {
    if err.kind() == io::ErrorKind::PermissionDenied {
        TerminateError::PermissionDenied
    } else if err.raw_os_error() == Some(ERROR_INVALID_PARAMETER) {
        // OpenProcess reports an unknown pid as an invalid parameter.
        TerminateError::NoSuchProcess
    } else {
        TerminateError::Other(err)
    }
}

fn priority(pid: u32) -> Option<i32> {
    unsafe {
        let handle = OpenProcess(PROCESS_QUERY_INFORMATION, 0, pid);
        if handle.is_null() {
            return None;
        }
        let prio = GetPriorityClass(handle);
        CloseHandle(handle);
        if prio == 0 { None } else { Some(prio as i32) }
    }
}

/// Thread counts for every running process, from one Toolhelp snapshot.
fn thread_counts() -> HashMap<u32, u32> {
    let mut counts = HashMap::new();
    unsafe {
        let snapshot = CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0);
        if snapshot == INVALID_HANDLE_VALUE {
            return counts;
        }
        let mut entry: PROCESSENTRY32W = std::mem::zeroed();
        entry.dwSize = std::mem::size_of::<PROCESSENTRY32W>() as u32;
        if Process32FirstW(snapshot, &mut entry) != 0 {
            loop {
                counts.insert(entry.th32ProcessID, entry.cntThreads);
                if Process32NextW(snapshot, &mut entry) == 0 {
                    break;
                }
            }
        }
        CloseHandle(snapshot);
    }
    counts
}

impl PlatformExtensions for Platform {
    fn process_extras(pids: &[u32]) -> HashMap<u32, ProcessExtras> {
        let threads = thread_counts();
        pids.iter()
            .filter_map(|&pid| {
                let extras = ProcessExtras {
                    priority: priority(pid),
                    threads: threads.get(&pid).copied(),
                };
                (extras != ProcessExtras::default()).then_some((pid, extras))
            })
            .collect()
    }

    fn terminate(pid: u32) -> Result<(), TerminateError> {
        unsafe {
            let handle = OpenProcess(PROCESS_TERMINATE, 0, pid);
            if handle.is_null() {
                return Err(classify(io::Error::last_os_error()));
            }
            let ok = TerminateProcess(handle, 1);
            let err = io::Error::last_os_error();
            CloseHandle(handle);
            if ok == 0 { Err(classify(err)) } else { Ok(()) }
        }
    }
}
