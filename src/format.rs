use chrono::{DateTime, Local};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const KB: u64 = 1024;
const MB: u64 = 1024 * 1024;
const GB: u64 = 1024 * 1024 * 1024;

const ELLIPSIS: &str = "...";

/// Shortens `s` to exactly `max_width` columns, ending in `...`.
/// Strings that already fit are returned unchanged.
pub fn truncate_name(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= ELLIPSIS.len() {
        return ELLIPSIS[..max_width].to_string();
    }

    let budget = max_width - ELLIPSIS.len();
    let mut result = String::with_capacity(max_width);
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > budget {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    // A wide character may stop short of the budget.
    for _ in width..budget {
        result.push(' ');
    }
    result.push_str(ELLIPSIS);
    result
}

pub fn format_bytes(bytes: u64) -> String {
    if bytes > GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes > MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.0} KB", bytes as f64 / KB as f64)
    }
}

pub fn format_gb(bytes: u64) -> String {
    format!("{:.1}GB", bytes as f64 / GB as f64)
}

/// Local wall-clock time of a Unix timestamp, `N/A` when unknown.
pub fn format_start_time(unix_secs: u64) -> String {
    if unix_secs == 0 {
        return "N/A".to_string();
    }
    i64::try_from(unix_secs)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|utc| utc.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}
