use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::format::format_gb;
use crate::system::snapshot::SystemSnapshot;
use crate::ui::theme::{ACCENT, BAR_EMPTY, BAR_FILLED, UsageTier, heading_style};

/// Colored `████░░░░  42%` spans for a usage percentage.
pub fn usage_bar(percent: f64, width: u16) -> Vec<Span<'static>> {
    let width = usize::from(width);
    let filled = ((width as f64 * percent / 100.0) as usize).min(width);
    let bar = format!(
        "{}{}",
        BAR_FILLED.repeat(filled),
        BAR_EMPTY.repeat(width - filled)
    );
    vec![
        Span::styled(bar, Style::default().fg(UsageTier::from_percent(percent).color())),
        Span::raw(format!(" {percent:>3.0}%")),
    ]
}

fn usage_line(label: &str, percent: f64, used: u64, total: u64, bar_width: u16) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{label:<14}"),
        Style::default().fg(Color::White),
    )];
    spans.extend(usage_bar(percent, bar_width));
    spans.push(Span::raw(format!(
        " ({} / {})",
        format_gb(used),
        format_gb(total)
    )));
    Line::from(spans)
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&SystemSnapshot>,
    shown: usize,
    hidden: usize,
    bar_width: u16,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT))
        .title(Span::styled(" System Monitor ", heading_style()));

    let lines = match snapshot {
        Some(s) => vec![
            usage_line(
                "Memory Usage:",
                s.memory_percent(),
                s.memory_used,
                s.memory_total,
                bar_width,
            ),
            usage_line(
                "Disk Usage:",
                s.disk_percent(),
                s.disk_used,
                s.disk_total,
                bar_width,
            ),
            Line::from(vec![
                Span::styled(format!("{:<14}", "Processes:"), Style::default().fg(Color::White)),
                Span::raw(format!(
                    "{} ({shown} shown, {hidden} filtered)",
                    s.process_count
                )),
            ]),
        ],
        None => vec![Line::from(Span::styled(
            "System metrics unavailable",
            Style::default().fg(Color::Red),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
