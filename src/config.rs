use std::collections::BTreeSet;
use std::time::Duration;

/// Background process names hidden from the table.
const DEFAULT_EXCLUDED: [&str; 20] = [
    "WmiApSrv.exe",
    "svchost.exe",
    "RuntimeBroker.exe",
    "dwm.exe",
    "csrss.exe",
    "smss.exe",
    "wininit.exe",
    "services.exe",
    "lsass.exe",
    "winlogon.exe",
    "System",
    "Registry",
    "Memory Compression",
    "Secure System",
    "SystemSettings.exe",
    "fontdrvhost.exe",
    "sihost.exe",
    "taskhostw.exe",
    "ctfmon.exe",
    "conhost.exe",
];

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub refresh: RefreshConfig,
    pub filter: FilterConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Number of ticks between two captures.
    pub countdown_ticks: u32,
    pub tick: Duration,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        RefreshConfig {
            countdown_ticks: 30,
            tick: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub excluded_names: BTreeSet<String>,
    pub min_memory_bytes: u64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            excluded_names: DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect(),
            min_memory_bytes: 1024 * 1024,
        }
    }
}

impl FilterConfig {
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_names.contains(name)
    }
}

#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub name_width: usize,
    pub bar_width: u16,
    /// Output longer than this many lines replaces the process table.
    pub output_lines: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            name_width: 24,
            bar_width: 20,
            output_lines: 8,
        }
    }
}
