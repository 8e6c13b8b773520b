use std::collections::HashMap;
use std::io;

#[derive(Debug)]
pub enum TerminateError {
    NoSuchProcess,
    PermissionDenied,
    Other(io::Error),
}

/// Per-process fields sysinfo does not expose on every platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessExtras {
    /// Scheduling niceness (Unix) or priority class (Windows).
    pub priority: Option<i32>,
    pub threads: Option<u32>,
}

pub trait PlatformExtensions {
    /// Extras for every pid in `pids`, gathered in one pass. Pids that
    /// vanished or cannot be inspected are absent from the map.
    fn process_extras(pids: &[u32]) -> HashMap<u32, ProcessExtras>;
    fn terminate(pid: u32) -> Result<(), TerminateError>;
}

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(any(target_os = "linux", target_os = "macos"))]
mod unix;
#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(target_os = "macos")]
use macos as platform_impl;
#[cfg(target_os = "windows")]
use windows as platform_impl;

pub fn process_extras(pids: &[u32]) -> HashMap<u32, ProcessExtras> {
    platform_impl::Platform::process_extras(pids)
}

pub fn terminate(pid: u32) -> Result<(), TerminateError> {
    if pid == 0 {
        return Err(TerminateError::NoSuchProcess);
    }
    platform_impl::Platform::terminate(pid)
}
