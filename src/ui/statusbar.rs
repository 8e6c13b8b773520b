use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::InputMode;
use crate::ui::theme::ACCENT;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    input_mode: &InputMode,
    prompt_input: &str,
    remaining: u32,
) {
    let line = match input_mode {
        InputMode::Normal => Line::from(Span::styled(
            format!("Next update in {remaining} seconds..."),
            Style::default().fg(ACCENT),
        )),
        InputMode::Prompt(kind) => Line::from(vec![
            Span::styled(
                kind.label(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::raw(prompt_input),
            Span::styled("\u{2588}", Style::default().fg(ACCENT)),
            Span::styled("  (Esc to cancel)", Style::default().fg(Color::DarkGray)),
        ]),
        InputMode::Detail(_) => Line::from(Span::styled(
            "Press Enter to continue...",
            Style::default().fg(Color::Yellow),
        )),
    };

    frame.render_widget(Paragraph::new(line), area);
}
