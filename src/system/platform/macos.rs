use std::collections::HashMap;

use libproc::libproc::proc_pid::pidinfo;
use libproc::libproc::task_info::TaskAllInfo;

use super::{PlatformExtensions, ProcessExtras, TerminateError, unix};

pub struct Platform;

fn priority(pid: u32) -> Option<i32> {
    // getpriority returns -1 on error, but -1 is also a valid niceness,
    // so errno has to be cleared first and checked after.
    unsafe { *libc::__error() = 0 };
    let prio = unsafe { libc::getpriority(libc::PRIO_PROCESS, pid as libc::id_t) };
    let errno = unsafe { *libc::__error() };
    if prio == -1 && errno != 0 {
        None
    } else {
        Some(prio)
    }
}

fn threads(pid: u32) -> Option<u32> {
    let info = pidinfo::<TaskAllInfo>(i32::try_from(pid).ok()?, 0).ok()?;
    u32::try_from(info.ptinfo.pti_threadnum).ok()
}

impl PlatformExtensions for Platform {
    fn process_extras(pids: &[u32]) -> HashMap<u32, ProcessExtras> {
        pids.iter()
            .filter_map(|&pid| {
                let extras = ProcessExtras {
                    priority: priority(pid),
                    threads: threads(pid),
                };
                (extras != ProcessExtras::default()).then_some((pid, extras))
            })
            .collect()
    }

    fn terminate(pid: u32) -> Result<(), TerminateError> {
        unix::send_sigterm(pid)
    }
}
