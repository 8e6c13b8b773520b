use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::command::Report;
use crate::ui::theme::report_style;

/// Rows the pane needs to show every report, border included. Zero hides it.
pub fn height(reports: &[Report]) -> u16 {
    if reports.is_empty() {
        0
    } else {
        u16::try_from(reports.len() + 1).unwrap_or(u16::MAX)
    }
}

/// Index range of `reports` visible in `rows` lines starting near `scroll`.
/// The window never runs past the last report.
pub fn visible_window(len: usize, rows: usize, scroll: usize) -> (usize, usize) {
    let rows = rows.max(1);
    let first = scroll.min(len.saturating_sub(rows));
    (first, (first + rows).min(len))
}

pub fn render(frame: &mut Frame, area: Rect, reports: &[Report], scroll: usize) {
    let rows = usize::from(area.height.saturating_sub(1));
    let (first, end) = visible_window(reports.len(), rows, scroll);

    let mut block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    if end - first < reports.len() {
        block = block.title(Span::styled(
            format!(
                " {}-{} of {} (Up/Down to scroll) ",
                first + 1,
                end,
                reports.len()
            ),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let lines: Vec<Line> = reports[first..end].iter().map(report_line).collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn report_line(report: &Report) -> Line<'_> {
    Line::from(Span::styled(report.text.as_str(), report_style(report.level)))
}
