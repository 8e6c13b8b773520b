use tracing::{info, warn};

use super::platform::{self, TerminateError};

#[derive(Debug)]
pub enum KillResult {
    Success(u32),
    PermissionDenied(u32),
    NotFound(u32),
    Failed(u32, String),
}

/// Sends a graceful termination request to `pid`.
pub fn kill_process(pid: u32) -> KillResult {
    match platform::terminate(pid) {
        Ok(()) => {
            info!(pid, "termination requested");
            KillResult::Success(pid)
        }
        Err(TerminateError::NoSuchProcess) => KillResult::NotFound(pid),
        Err(TerminateError::PermissionDenied) => {
            warn!(pid, "termination denied");
            KillResult::PermissionDenied(pid)
        }
        Err(TerminateError::Other(err)) => {
            warn!(pid, error = %err, "termination failed");
            KillResult::Failed(pid, format!("Failed to terminate PID {pid}: {err}"))
        }
    }
}
