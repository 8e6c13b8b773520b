use std::io;

use super::TerminateError;

pub fn send_sigterm(pid: u32) -> Result<(), TerminateError> {
    // Values above i32::MAX would wrap into process-group targets.
    let Ok(raw) = libc::pid_t::try_from(pid) else {
        return Err(TerminateError::NoSuchProcess);
    };
    // SAFETY: kill(2) takes plain integers and touches no memory we own.
    let rc = unsafe { libc::kill(raw, libc::SIGTERM) };
    if rc == 0 {
        Ok(())
    } else {
        Err(classify(io::Error::last_os_error()))
    }
}

fn classify(err: io::Error) -> TerminateError {
    match err.raw_os_error() {
        Some(libc::ESRCH) => TerminateError::NoSuchProcess,
        Some(libc::EPERM) => TerminateError::PermissionDenied,
        _ => TerminateError::Other(err),
    }
}
