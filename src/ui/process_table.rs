use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Cell, Paragraph, Row, Table};

use crate::format::format_bytes;
use crate::system::process::ProcessList;
use crate::ui::theme::{heading_style, memory_color, row_color};

const HEADERS: [&str; 5] = ["Process Name", "PID", "PPID", "Memory", "Threads"];

pub fn render(frame: &mut Frame, area: Rect, list: &ProcessList, name_width: u16) {
    if list.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No processes match the current filters",
                Style::default().fg(Color::Yellow),
            )),
            area,
        );
        return;
    }

    let header = Row::new(HEADERS).style(heading_style());

    let rows = list.records.iter().enumerate().map(|(i, p)| {
        let color = row_color(i);
        Row::new(vec![
            Cell::from(p.display_name.clone()),
            Cell::from(p.pid.to_string()),
            Cell::from(p.parent_pid.to_string()),
            Cell::from(format_bytes(p.memory_bytes))
                .style(Style::default().fg(memory_color(p.memory_bytes, color))),
            Cell::from(p.threads.map_or_else(|| "N/A".to_string(), |t| t.to_string())),
        ])
        .style(Style::default().fg(color))
    });

    let widths = [
        Constraint::Length(name_width),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(12),
        Constraint::Length(8),
    ];

    frame.render_widget(Table::new(rows, widths).header(header), area);
}
