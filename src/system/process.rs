use std::path::PathBuf;

use crate::config::FilterConfig;
use crate::format::truncate_name;

/// Point-in-time view of one process. Only valid for the cycle that
/// captured it: pids are recycled by the operating system.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub parent_pid: u32,
    pub display_name: String,
    pub full_name: String,
    pub memory_bytes: u64,
    pub threads: Option<u32>,
    pub priority: Option<i32>,
    pub start_time: u64,
    pub working_directory: Option<PathBuf>,
    pub command_line: Option<String>,
}

impl ProcessRecord {
    pub fn new(pid: u32, full_name: impl Into<String>, memory_bytes: u64) -> Self {
        let full_name = full_name.into();
        ProcessRecord {
            pid,
            parent_pid: 0,
            display_name: full_name.clone(),
            full_name,
            memory_bytes,
            threads: None,
            priority: None,
            start_time: 0,
            working_directory: None,
            command_line: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProcessList {
    pub records: Vec<ProcessRecord>,
    /// Processes removed by the name and memory filters.
    pub hidden: usize,
}

impl ProcessList {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn build_process_list(
    raw: Vec<ProcessRecord>,
    filter: &FilterConfig,
    name_width: usize,
) -> ProcessList {
    let total = raw.len();
    let mut records: Vec<ProcessRecord> = raw
        .into_iter()
        .filter(|p| !filter.is_excluded(&p.full_name) && p.memory_bytes >= filter.min_memory_bytes)
        .map(|mut p| {
            p.display_name = truncate_name(&p.full_name, name_width);
            p
        })
        .collect();

    // Ties fall back to pid so the order is stable between cycles.
    records.sort_by(|a, b| b.memory_bytes.cmp(&a.memory_bytes).then(a.pid.cmp(&b.pid)));

    ProcessList {
        hidden: total - records.len(),
        records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = 1024 * 1024;

    #[test]
    fn filters_denylist_and_small_processes() {
        let raw = vec![
            ProcessRecord::new(1, "svchost.exe", 50 * MB),
            ProcessRecord::new(2, "tiny", MB - 1),
            ProcessRecord::new(3, "edge", MB),
            ProcessRecord::new(4, "chrome.exe", 900 * MB),
        ];
        let list = build_process_list(raw, &FilterConfig::default(), 24);
        let pids: Vec<u32> = list.records.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![4, 3]);
        assert_eq!(list.hidden, 2);
    }

    #[test]
    fn sorted_descending_by_memory() {
        let raw = vec![
            ProcessRecord::new(10, "a", 5 * MB),
            ProcessRecord::new(11, "b", 50 * MB),
            ProcessRecord::new(12, "c", 20 * MB),
            ProcessRecord::new(9, "d", 20 * MB),
        ];
        let list = build_process_list(raw, &FilterConfig::default(), 24);
        let pids: Vec<u32> = list.records.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![11, 9, 12, 10]);
    }

    #[test]
    fn display_name_is_truncated_full_name_kept() {
        let long = "VeryLongApplicationHelperProcess.exe";
        let list = build_process_list(
            vec![ProcessRecord::new(7, long, 10 * MB)],
            &FilterConfig::default(),
            24,
        );
        let record = &list.records[0];
        assert_eq!(record.full_name, long);
        assert_eq!(record.display_name, "VeryLongApplicationHe...");
    }
}
