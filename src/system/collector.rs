use std::path::Path;

use sysinfo::{Disks, Pid, Process, ProcessRefreshKind, ProcessesToUpdate, System};
use tracing::{debug, debug_span};

use super::kill::{KillResult, kill_process};
use super::platform;
use super::process::{ProcessList, ProcessRecord, build_process_list};
use super::provider::{ProviderError, SnapshotProvider};
use super::snapshot::SystemSnapshot;
use crate::config::FilterConfig;

pub struct Collector {
    sys: System,
    filter: FilterConfig,
    name_width: usize,
}

impl Collector {
    pub fn new(filter: FilterConfig, name_width: usize) -> Self {
        Collector {
            sys: System::new(),
            filter,
            name_width,
        }
    }

    fn ensure_supported() -> Result<(), ProviderError> {
        if sysinfo::IS_SUPPORTED_SYSTEM {
            Ok(())
        } else {
            Err(ProviderError::Unsupported)
        }
    }
}

impl SnapshotProvider for Collector {
    fn system_snapshot(&mut self) -> Result<SystemSnapshot, ProviderError> {
        Self::ensure_supported()?;
        let _span = debug_span!("collector.system_snapshot").entered();

        self.sys.refresh_memory();
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing(),
        );

        let memory_total = self.sys.total_memory();
        if memory_total == 0 {
            return Err(ProviderError::Collection {
                what: "memory usage",
                message: "total memory reported as zero".to_string(),
            });
        }

        let disks = Disks::new_with_refreshed_list();
        let (disk_used, disk_total) = root_disk_usage(&disks);

        let process_count = self
            .sys
            .processes()
            .values()
            .filter(|p| p.thread_kind().is_none())
            .count();

        Ok(SystemSnapshot {
            memory_used: self.sys.used_memory(),
            memory_total,
            disk_used,
            disk_total,
            process_count,
        })
    }

    fn process_list(&mut self) -> Result<ProcessList, ProviderError> {
        Self::ensure_supported()?;
        let _span = debug_span!("collector.process_list").entered();

        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::everything(),
        );

        let raw = self
            .sys
            .processes()
            .iter()
            .filter(|(_, p)| p.thread_kind().is_none())
            .map(|(pid, p)| base_record(pid.as_u32(), p))
            .collect();

        let mut list = build_process_list(raw, &self.filter, self.name_width);

        // Platform lookups cost syscalls, so only pay for what is shown.
        let pids: Vec<u32> = list.records.iter().map(|r| r.pid).collect();
        let extras = platform::process_extras(&pids);
        for record in &mut list.records {
            let found = extras.get(&record.pid).copied().unwrap_or_default();
            record.priority = found.priority;
            record.threads = found.threads.or_else(|| {
                self.sys
                    .process(Pid::from_u32(record.pid))
                    .and_then(|p| p.tasks())
                    .map(|tasks| tasks.len() as u32)
            });
        }

        debug!(shown = list.len(), hidden = list.hidden, "process list captured");
        Ok(list)
    }

    fn terminate(&mut self, pid: u32) -> KillResult {
        kill_process(pid)
    }

    fn process_exists(&mut self, pid: u32) -> bool {
        let target = [Pid::from_u32(pid)];
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&target),
            true,
            ProcessRefreshKind::nothing(),
        );
        self.sys.process(target[0]).is_some()
    }
}

fn base_record(pid: u32, process: &Process) -> ProcessRecord {
    let command = process
        .cmd()
        .iter()
        .map(|s| s.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ");

    ProcessRecord {
        pid,
        parent_pid: process.parent().map(|p| p.as_u32()).unwrap_or(0),
        display_name: String::new(),
        full_name: process.name().to_string_lossy().into_owned(),
        memory_bytes: process.memory(),
        threads: None,
        priority: None,
        start_time: process.start_time(),
        working_directory: process.cwd().map(Path::to_path_buf),
        command_line: (!command.is_empty()).then_some(command),
    }
}

/// (used, total) bytes of the filesystem mounted at `/`, or of the
/// shortest mount point when there is no `/` (Windows drive roots).
fn root_disk_usage(disks: &Disks) -> (u64, u64) {
    let list = disks.list();
    let root = list
        .iter()
        .find(|d| d.mount_point() == Path::new("/"))
        .or_else(|| {
            list.iter()
                .min_by_key(|d| d.mount_point().as_os_str().len())
        });
    match root {
        Some(disk) => {
            let total = disk.total_space();
            (total.saturating_sub(disk.available_space()), total)
        }
        None => (0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collector() -> Collector {
        Collector::new(FilterConfig::default(), 24)
    }

    #[test]
    fn system_snapshot_reports_memory_and_processes() {
        let mut collector = collector();
        let snapshot = collector.system_snapshot().unwrap();
        assert!(snapshot.memory_total > 0);
        assert!(snapshot.memory_used <= snapshot.memory_total);
        assert!(snapshot.process_count > 0);
    }

    #[test]
    fn process_list_is_sorted_and_filtered() {
        let mut collector = collector();
        let list = collector.process_list().unwrap();
        let filter = FilterConfig::default();
        for pair in list.records.windows(2) {
            assert!(pair[0].memory_bytes >= pair[1].memory_bytes);
        }
        for record in &list.records {
            assert!(record.memory_bytes >= filter.min_memory_bytes);
            assert!(!filter.is_excluded(&record.full_name));
        }
    }

    #[test]
    fn current_process_exists() {
        let mut collector = collector();
        assert!(collector.process_exists(std::process::id()));
        assert!(!collector.process_exists(u32::MAX - 1));
    }
}
