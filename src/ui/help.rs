use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::theme::ACCENT;

/// Short labels for the one-line commands bar; the full text lives in the
/// `h` report.
static BAR: [(&str, &str); 6] = [
    ("k", "Kill"),
    ("s", "Search"),
    ("d", "Detail"),
    ("r", "Refresh"),
    ("h", "Help"),
    ("q", "Quit"),
];

pub fn render(frame: &mut Frame, area: Rect) {
    let spans: Vec<Span> = BAR
        .iter()
        .flat_map(|(key, desc)| pill_spans(key, desc))
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn pill_spans<'a>(key: &'a str, desc: &'a str) -> [Span<'a>; 3] {
    [
        Span::raw(" "),
        Span::styled(
            format!(" {key} "),
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {desc}"), Style::default().fg(Color::Gray)),
    ]
}
