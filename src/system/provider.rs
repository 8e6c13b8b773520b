use thiserror::Error;

use super::kill::KillResult;
use super::process::ProcessList;
use super::snapshot::SystemSnapshot;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("process statistics are not supported on this platform")]
    Unsupported,

    #[error("failed to collect {what}: {message}")]
    Collection { what: &'static str, message: String },
}

/// Source of system metrics and process control consumed by the poll loop.
pub trait SnapshotProvider {
    fn system_snapshot(&mut self) -> Result<SystemSnapshot, ProviderError>;

    /// Filtered process list, sorted by descending resident memory.
    fn process_list(&mut self) -> Result<ProcessList, ProviderError>;

    /// Asks the process to exit (SIGTERM on Unix).
    fn terminate(&mut self, pid: u32) -> KillResult;

    fn process_exists(&mut self, pid: u32) -> bool;
}
