use std::collections::HashMap;

use super::{PlatformExtensions, ProcessExtras, TerminateError, unix};

pub struct Platform;

/// Niceness and thread count from the contents of /proc/{pid}/stat.
fn parse_stat(contents: &str) -> Option<ProcessExtras> {
    // comm may contain spaces and parens, so split after the last )
    let after_comm = contents.rfind(')')? + 1;
    let fields: Vec<&str> = contents[after_comm..].split_whitespace().collect();
    // Fields after comm: state(0) ppid(1) pgrp(2) session(3) tty_nr(4)
    // tpgid(5) flags(6) minflt(7) cminflt(8) majflt(9) cmajflt(10)
    // utime(11) stime(12) cutime(13) cstime(14) priority(15) nice(16)
    // num_threads(17)
    Some(ProcessExtras {
        priority: fields.get(16).and_then(|f| f.parse().ok()),
        threads: fields.get(17).and_then(|f| f.parse().ok()),
    })
}

impl PlatformExtensions for Platform {
    fn process_extras(pids: &[u32]) -> HashMap<u32, ProcessExtras> {
        pids.iter()
            .filter_map(|&pid| {
                let contents = std::fs::read_to_string(format!("/proc/{pid}/stat")).ok()?;
                parse_stat(&contents).map(|extras| (pid, extras))
            })
            .collect()
    }

    fn terminate(pid: u32) -> Result<(), TerminateError> {
        unix::send_sigterm(pid)
    }
}
