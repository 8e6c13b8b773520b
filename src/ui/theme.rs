use ratatui::style::{Color, Modifier, Style};

use crate::command::ReportLevel;

const GIB: u64 = 1024 * 1024 * 1024;
const HALF_GIB: u64 = 512 * 1024 * 1024;

pub const ACCENT: Color = Color::Cyan;
pub const BAR_FILLED: &str = "\u{2588}";
pub const BAR_EMPTY: &str = "\u{2591}";

/// Color tier of a usage percentage: above 80 is high, above 60 medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageTier {
    Low,
    Medium,
    High,
}

impl UsageTier {
    pub fn from_percent(percent: f64) -> Self {
        if percent > 80.0 {
            UsageTier::High
        } else if percent > 60.0 {
            UsageTier::Medium
        } else {
            UsageTier::Low
        }
    }

    pub fn color(self) -> Color {
        match self {
            UsageTier::High => Color::Red,
            UsageTier::Medium => Color::Yellow,
            UsageTier::Low => Color::Green,
        }
    }
}

/// Alternating row colors for readability.
pub fn row_color(index: usize) -> Color {
    if index % 2 == 0 {
        Color::White
    } else {
        Color::DarkGray
    }
}

/// Highlights processes above 1 GiB (red) and 512 MiB (yellow).
pub fn memory_color(memory_bytes: u64, row: Color) -> Color {
    if memory_bytes > GIB {
        Color::Red
    } else if memory_bytes > HALF_GIB {
        Color::Yellow
    } else {
        row
    }
}

pub fn heading_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn report_style(level: ReportLevel) -> Style {
    match level {
        ReportLevel::Heading => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ReportLevel::Info => Style::default().fg(Color::White),
        ReportLevel::Success => Style::default().fg(Color::Green),
        ReportLevel::Warning | ReportLevel::Hint => Style::default().fg(Color::Yellow),
        ReportLevel::Error => Style::default().fg(Color::Red),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_tiers_use_strict_boundaries() {
        assert_eq!(UsageTier::from_percent(85.0), UsageTier::High);
        assert_eq!(UsageTier::from_percent(80.0), UsageTier::Medium);
        assert_eq!(UsageTier::from_percent(65.0), UsageTier::Medium);
        assert_eq!(UsageTier::from_percent(60.0), UsageTier::Low);
        assert_eq!(UsageTier::from_percent(30.0), UsageTier::Low);
        assert_eq!(UsageTier::High.color(), Color::Red);
        assert_eq!(UsageTier::Medium.color(), Color::Yellow);
        assert_eq!(UsageTier::Low.color(), Color::Green);
    }

    #[test]
    fn memory_highlight_thresholds() {
        assert_eq!(memory_color(2 * GIB, Color::White), Color::Red);
        assert_eq!(memory_color(GIB, Color::White), Color::Yellow);
        assert_eq!(memory_color(600 * 1024 * 1024, Color::White), Color::Yellow);
        assert_eq!(memory_color(HALF_GIB, Color::DarkGray), Color::DarkGray);
    }

    #[test]
    fn rows_alternate() {
        assert_eq!(row_color(0), Color::White);
        assert_eq!(row_color(1), Color::DarkGray);
        assert_eq!(row_color(2), Color::White);
    }
}
