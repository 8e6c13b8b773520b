use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use crate::format::{format_bytes, format_start_time};
use crate::system::process::ProcessRecord;
use crate::ui::theme::{ACCENT, heading_style};

const NOT_AVAILABLE: &str = "N/A";

/// Centered overlay with every field of one process record.
pub fn render(frame: &mut Frame, area: Rect, process: &ProcessRecord) {
    let width = 72u16.min(area.width.saturating_sub(2));
    let height = 15u16.min(area.height);
    let overlay = centered_rect(width, height, area);

    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT))
        .title(Span::styled(
            format!(" Process Details - PID {} ", process.pid),
            heading_style(),
        ));

    let lines = vec![
        detail_line("Name", process.full_name.clone()),
        detail_line("PID", process.pid.to_string()),
        detail_line("Parent PID", process.parent_pid.to_string()),
        detail_line("Memory", format_bytes(process.memory_bytes)),
        detail_line("Threads", or_na(process.threads)),
        detail_line("Priority", or_na(process.priority)),
        detail_line("Start Time", format_start_time(process.start_time)),
        detail_line(
            "Working Dir",
            process
                .working_directory
                .as_ref()
                .map_or_else(|| NOT_AVAILABLE.to_string(), |p| p.display().to_string()),
        ),
        detail_line(
            "Command Line",
            process
                .command_line
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ),
        Line::raw(""),
        Line::from(Span::styled(
            "Press Enter to continue...",
            Style::default().fg(Color::Yellow),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        overlay,
    );
}

fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

fn detail_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {:<14}", format!("{label}:")),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [vert] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [horiz] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(vert);
    horiz
}
