use clap::Parser;
use color_eyre::Result;
use crossterm::style::Stylize;
use tracing::info;

use procwatch::action::Action;
use procwatch::app::{App, ExitReason};
use procwatch::config::Config;
use procwatch::event::EventHandler;
use procwatch::ui;

#[derive(Parser)]
#[command(
    name = "procwatch",
    version,
    about = "Interactive terminal process monitor with memory and disk overview"
)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _cli = Cli::parse();

    #[cfg(feature = "trace-log")]
    procwatch::trace::init_tracing_json(&procwatch::trace::default_log_path())?;

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, Config::default()).await;
    ratatui::restore();

    let reason = result?;
    info!(?reason, "monitor stopped");
    println!("{}", reason.farewell().green());
    Ok(())
}

async fn run(terminal: &mut ratatui::DefaultTerminal, config: Config) -> Result<ExitReason> {
    let tick = config.refresh.tick;
    let mut app = App::with_collector(config);
    // First tick is scheduled after the initial capture completes.
    let mut events = EventHandler::new(tick);

    terminal.draw(|frame| ui::draw(frame, &app))?;

    while app.is_running() {
        let epoch = app.countdown.epoch();
        match events.next().await {
            Some(event) => app.handle_event(event),
            // Input stream closed: nothing can reach the prompt anymore.
            None => app.dispatch(Action::Interrupt),
        }
        if app.countdown.epoch() != epoch {
            events.restart_ticks();
        }
        if app.is_running() {
            terminal.draw(|frame| ui::draw(frame, &app))?;
        }
    }

    Ok(app.exit_reason().unwrap_or(ExitReason::Quit))
}
