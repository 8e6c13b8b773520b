use crate::system::kill::KillResult;
use crate::system::process::{ProcessList, ProcessRecord};
use crate::system::provider::SnapshotProvider;

/// Key label and description of every command, in help order.
pub const COMMANDS: [(&str, &str); 6] = [
    ("k <PID>", "Kill process"),
    ("s <name>", "Search for process"),
    ("d <PID>", "Show detailed process info"),
    ("r", "Refresh now"),
    ("q", "Quit"),
    ("h", "Show this help"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Heading,
    Info,
    Success,
    Warning,
    Error,
    Hint,
}

/// One line of command output shown in the output pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub level: ReportLevel,
    pub text: String,
}

impl Report {
    pub fn new(level: ReportLevel, text: impl Into<String>) -> Self {
        Report {
            level,
            text: text.into(),
        }
    }

    pub fn cancelled() -> Self {
        Report::new(ReportLevel::Warning, "Operation cancelled")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PidInput {
    Cancel,
    Pid(u32),
    Invalid(&'static str),
}

pub fn parse_pid(input: &str) -> PidInput {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return PidInput::Cancel;
    }
    match trimmed.parse::<i64>() {
        Err(_) => PidInput::Invalid("Please enter a valid number for PID"),
        Ok(n) if n <= 0 => PidInput::Invalid("PID must be a positive number"),
        Ok(n) => match u32::try_from(n) {
            Ok(pid) => PidInput::Pid(pid),
            Err(_) => PidInput::Invalid("PID is out of range"),
        },
    }
}

/// Records whose full name contains `term`, ignoring case.
pub fn search<'a>(list: &'a ProcessList, term: &str) -> Vec<&'a ProcessRecord> {
    let needle = term.to_lowercase();
    list.records
        .iter()
        .filter(|p| p.full_name.to_lowercase().contains(&needle))
        .collect()
}

pub fn search_report(list: &ProcessList, term: &str) -> Vec<Report> {
    let matches = search(list, term);
    if matches.is_empty() {
        return vec![Report::new(
            ReportLevel::Warning,
            format!("No processes found matching '{term}'"),
        )];
    }
    matches
        .into_iter()
        .map(|p| {
            Report::new(
                ReportLevel::Success,
                format!("Found: {} (PID: {})", p.full_name, p.pid),
            )
        })
        .collect()
}

pub fn find_process(list: &ProcessList, pid: u32) -> Option<&ProcessRecord> {
    list.records.iter().find(|p| p.pid == pid)
}

pub fn not_in_list_report(pid: u32) -> Report {
    Report::new(
        ReportLevel::Error,
        format!("Process with PID {pid} not found in current list"),
    )
}

/// Terminates `pid` after checking it is live and part of the current list.
pub fn kill<P: SnapshotProvider>(provider: &mut P, list: &ProcessList, pid: u32) -> Vec<Report> {
    if !provider.process_exists(pid) {
        return vec![Report::new(
            ReportLevel::Error,
            format!("Error: Process with PID {pid} does not exist"),
        )];
    }
    let Some(process) = find_process(list, pid) else {
        return vec![
            not_in_list_report(pid),
            Report::new(ReportLevel::Hint, "Press r to refresh the list and try again"),
        ];
    };
    let name = process.full_name.as_str();

    match provider.terminate(pid) {
        KillResult::Success(_) => vec![Report::new(
            ReportLevel::Success,
            format!("Successfully terminated process: {name} (PID: {pid})"),
        )],
        KillResult::PermissionDenied(_) => vec![
            Report::new(
                ReportLevel::Error,
                format!("Error: Access denied to terminate process {name} (PID: {pid})"),
            ),
            Report::new(
                ReportLevel::Hint,
                "Try running the monitor with elevated privileges (sudo or Administrator)",
            ),
        ],
        KillResult::NotFound(_) => vec![Report::new(
            ReportLevel::Error,
            format!("Error: Process {pid} no longer exists"),
        )],
        KillResult::Failed(_, message) => {
            vec![Report::new(ReportLevel::Error, format!("Error: {message}"))]
        }
    }
}

pub fn help_report() -> Vec<Report> {
    let mut reports = vec![Report::new(ReportLevel::Heading, "Commands:")];
    reports.extend(
        COMMANDS
            .iter()
            .map(|(key, desc)| Report::new(ReportLevel::Info, format!("{key:<9}- {desc}"))),
    );
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::process::ProcessRecord;
    use crate::system::provider::ProviderError;
    use crate::system::snapshot::SystemSnapshot;

    struct StubProvider {
        live: Vec<u32>,
        outcome: fn(u32) -> KillResult,
        terminated: Vec<u32>,
    }

    impl SnapshotProvider for StubProvider {
        fn system_snapshot(&mut self) -> Result<SystemSnapshot, ProviderError> {
            Ok(SystemSnapshot::default())
        }

        fn process_list(&mut self) -> Result<ProcessList, ProviderError> {
            Ok(ProcessList::default())
        }

        fn terminate(&mut self, pid: u32) -> KillResult {
            self.terminated.push(pid);
            (self.outcome)(pid)
        }

        fn process_exists(&mut self, pid: u32) -> bool {
            self.live.contains(&pid)
        }
    }

    fn stub(live: &[u32], outcome: fn(u32) -> KillResult) -> StubProvider {
        StubProvider {
            live: live.to_vec(),
            outcome,
            terminated: Vec::new(),
        }
    }

    fn scenario_list() -> ProcessList {
        ProcessList {
            records: vec![
                ProcessRecord::new(100, "chrome.exe", 2_100_000 * 1024),
                ProcessRecord::new(200, "notepad.exe", 5_000 * 1024),
            ],
            hidden: 0,
        }
    }

    #[test]
    fn parse_pid_cases() {
        assert_eq!(parse_pid(""), PidInput::Cancel);
        assert_eq!(parse_pid("   "), PidInput::Cancel);
        assert_eq!(parse_pid(" 42 "), PidInput::Pid(42));
        assert!(matches!(parse_pid("abc"), PidInput::Invalid(_)));
        assert!(matches!(parse_pid("12x"), PidInput::Invalid(_)));
        assert!(matches!(parse_pid("0"), PidInput::Invalid(_)));
        assert!(matches!(parse_pid("-5"), PidInput::Invalid(_)));
        assert!(matches!(parse_pid("99999999999"), PidInput::Invalid(_)));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let list = scenario_list();
        let pids: Vec<u32> = search(&list, "NOTE").iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![200]);
        let pids: Vec<u32> = search(&list, ".exe").iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![100, 200]);
    }

    #[test]
    fn search_report_no_match() {
        let reports = search_report(&scenario_list(), "firefox");
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].level, ReportLevel::Warning);
        assert_eq!(reports[0].text, "No processes found matching 'firefox'");
    }

    #[test]
    fn kill_unknown_pid_reports_does_not_exist() {
        let mut provider = stub(&[100, 200], KillResult::Success);
        let reports = kill(&mut provider, &scenario_list(), 999);
        assert_eq!(reports[0].text, "Error: Process with PID 999 does not exist");
        assert!(provider.terminated.is_empty());
    }

    #[test]
    fn kill_live_pid_outside_list_is_refused() {
        let mut provider = stub(&[100, 200, 300], KillResult::Success);
        let reports = kill(&mut provider, &scenario_list(), 300);
        assert_eq!(reports[0], not_in_list_report(300));
        assert!(provider.terminated.is_empty());
    }

    #[test]
    fn kill_success_names_the_process() {
        let mut provider = stub(&[100, 200], KillResult::Success);
        let reports = kill(&mut provider, &scenario_list(), 200);
        assert_eq!(
            reports,
            vec![Report::new(
                ReportLevel::Success,
                "Successfully terminated process: notepad.exe (PID: 200)"
            )]
        );
        assert_eq!(provider.terminated, vec![200]);
    }

    #[test]
    fn kill_protected_pid_reports_permission_denied_with_hint() {
        let mut provider = stub(&[100, 200], KillResult::PermissionDenied);
        let reports = kill(&mut provider, &scenario_list(), 100);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].level, ReportLevel::Error);
        assert!(reports[0].text.contains("Access denied"));
        assert_eq!(reports[1].level, ReportLevel::Hint);
    }

    #[test]
    fn kill_vanished_between_check_and_signal() {
        let mut provider = stub(&[100, 200], KillResult::NotFound);
        let reports = kill(&mut provider, &scenario_list(), 100);
        assert_eq!(reports[0].text, "Error: Process 100 no longer exists");
    }

    #[test]
    fn help_lists_every_command() {
        let reports = help_report();
        assert_eq!(reports.len(), COMMANDS.len() + 1);
        assert_eq!(reports[1].text, "k <PID>  - Kill process");
        assert_eq!(reports[6].text, "h        - Show this help");
    }
}
