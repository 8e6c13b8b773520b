pub mod detail_panel;
pub mod help;
pub mod output;
pub mod process_table;
pub mod statusbar;
pub mod system_panel;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::{App, InputMode};
use crate::system::provider::SnapshotProvider;

/// System panel, process table, command output, commands bar and the
/// countdown/prompt line, top to bottom.
pub fn draw<P: SnapshotProvider>(frame: &mut Frame, app: &App<P>) {
    let display = &app.config.display;
    let name_width = u16::try_from(display.name_width).unwrap_or(u16::MAX);

    // Output longer than `output_lines` takes over the table area.
    let expanded = app.reports.len() > usize::from(display.output_lines);
    let (table, output) = if expanded {
        (Constraint::Length(0), Constraint::Min(3))
    } else {
        (
            Constraint::Min(3),
            Constraint::Length(output::height(&app.reports)),
        )
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            table,
            output,
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    system_panel::render(
        frame,
        chunks[0],
        app.system.as_ref(),
        app.processes.len(),
        app.processes.hidden,
        display.bar_width,
    );
    if !expanded {
        process_table::render(frame, chunks[1], &app.processes, name_width);
    }
    if !app.reports.is_empty() {
        output::render(frame, chunks[2], &app.reports, app.report_scroll);
    }
    help::render(frame, chunks[3]);
    statusbar::render(
        frame,
        chunks[4],
        &app.input_mode,
        &app.prompt_input,
        app.countdown.remaining(),
    );

    // Detail overlay last so it sits on top
    if let InputMode::Detail(process) = &app.input_mode {
        detail_panel::render(frame, frame.area(), process);
    }
}
