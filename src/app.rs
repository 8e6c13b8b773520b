use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

use crate::action::{Action, PromptKind, ScrollDirection};
use crate::command::{self, PidInput, Report, ReportLevel};
use crate::config::Config;
use crate::countdown::{Countdown, CountdownStep};
use crate::event::Event;
use crate::system::collector::Collector;
use crate::system::process::{ProcessList, ProcessRecord};
use crate::system::provider::SnapshotProvider;
use crate::system::snapshot::SystemSnapshot;

const MAX_PROMPT_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Refreshing,
    Waiting,
    Terminated,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Prompt(PromptKind),
    /// Detail overlay of a record from the current list, open until acknowledged.
    Detail(ProcessRecord),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Quit,
    Interrupted,
}

impl ExitReason {
    pub fn farewell(self) -> &'static str {
        match self {
            ExitReason::Quit => "Exiting process monitor...",
            ExitReason::Interrupted => "Interrupted. Exiting process monitor...",
        }
    }
}

pub struct App<P: SnapshotProvider = Collector> {
    pub phase: Phase,
    pub input_mode: InputMode,
    pub prompt_input: String,
    /// `None` when the last capture failed.
    pub system: Option<SystemSnapshot>,
    pub processes: ProcessList,
    pub reports: Vec<Report>,
    /// First visible line of the output pane.
    pub report_scroll: usize,
    pub countdown: Countdown,
    pub config: Config,
    pub cycle: u64,
    exit_reason: Option<ExitReason>,
    provider: P,
}

impl App<Collector> {
    pub fn with_collector(config: Config) -> Self {
        let collector = Collector::new(config.filter.clone(), config.display.name_width);
        App::new(collector, config)
    }
}

impl<P: SnapshotProvider> App<P> {
    /// Builds the app and performs the first capture.
    pub fn new(provider: P, config: Config) -> Self {
        let mut app = App {
            phase: Phase::Refreshing,
            input_mode: InputMode::Normal,
            prompt_input: String::new(),
            system: None,
            processes: ProcessList::default(),
            reports: Vec::new(),
            report_scroll: 0,
            countdown: Countdown::new(config.refresh.countdown_ticks),
            config,
            cycle: 0,
            exit_reason: None,
            provider,
        };
        app.refresh_data();
        app
    }

    pub fn is_running(&self) -> bool {
        self.phase != Phase::Terminated
    }

    pub fn exit_reason(&self) -> Option<ExitReason> {
        self.exit_reason
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Replaces the snapshot and process list; nothing from the previous
    /// cycle survives, including on failure.
    pub fn refresh_data(&mut self) {
        self.phase = Phase::Refreshing;
        self.cycle += 1;
        self.set_reports(Vec::new());

        match self.provider.system_snapshot() {
            Ok(snapshot) => self.system = Some(snapshot),
            Err(err) => {
                warn!(error = %err, "system snapshot failed");
                self.system = None;
                self.reports
                    .push(Report::new(ReportLevel::Error, format!("Error: {err}")));
            }
        }

        match self.provider.process_list() {
            Ok(list) => self.processes = list,
            Err(err) => {
                warn!(error = %err, "process list failed");
                self.processes = ProcessList::default();
                self.reports
                    .push(Report::new(ReportLevel::Error, format!("Error: {err}")));
            }
        }

        debug!(
            cycle = self.cycle,
            processes = self.processes.len(),
            "refresh complete"
        );
        self.phase = Phase::Waiting;
        self.countdown.restart();
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                let action = self.map_key(key);
                self.dispatch(action);
            }
            Event::Tick => self.on_tick(),
            Event::Resize => {}
            Event::Interrupt => self.dispatch(Action::Interrupt),
        }
    }

    /// One countdown increment. Ignored while a prompt or the detail
    /// overlay is open, so no capture happens mid-command.
    pub fn on_tick(&mut self) {
        if self.phase != Phase::Waiting || self.input_mode != InputMode::Normal {
            return;
        }
        if self.countdown.tick() == CountdownStep::Elapsed {
            self.refresh_data();
        }
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Raw mode delivers Ctrl+C as a key; it is still an interrupt.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Interrupt;
        }

        match self.input_mode {
            InputMode::Normal => map_key_normal(key),
            InputMode::Prompt(_) => map_key_prompt(key),
            InputMode::Detail(_) => map_key_detail(key),
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.terminate(ExitReason::Quit),
            Action::Interrupt => self.terminate(ExitReason::Interrupted),
            Action::Refresh => self.refresh_data(),
            Action::ShowHelp => self.finish_command(command::help_report()),
            Action::BeginPrompt(kind) => {
                self.set_reports(Vec::new());
                self.prompt_input.clear();
                self.input_mode = InputMode::Prompt(kind);
            }
            Action::PromptInput(c) => {
                if !c.is_control() && self.prompt_input.chars().count() < MAX_PROMPT_LEN {
                    self.prompt_input.push(c);
                }
            }
            Action::PromptBackspace => {
                self.prompt_input.pop();
            }
            Action::PromptSubmit => self.submit_prompt(),
            Action::PromptCancel => self.finish_command(vec![Report::cancelled()]),
            Action::Acknowledge => {
                self.input_mode = InputMode::Normal;
                self.countdown.restart();
            }
            Action::ScrollReports(direction) => {
                let last = self.reports.len().saturating_sub(1);
                self.report_scroll = match direction {
                    ScrollDirection::Up => self.report_scroll.saturating_sub(1),
                    ScrollDirection::Down => (self.report_scroll + 1).min(last),
                };
                self.countdown.restart();
            }
            Action::Ignored => self.countdown.restart(),
            Action::None => {}
        }
    }

    fn submit_prompt(&mut self) {
        let InputMode::Prompt(kind) = &self.input_mode else {
            return;
        };
        let kind = *kind;
        let input = std::mem::take(&mut self.prompt_input);

        match kind {
            // The term is matched as typed, surrounding spaces included.
            PromptKind::SearchName => {
                if input.is_empty() {
                    self.finish_command(vec![Report::cancelled()]);
                } else {
                    let reports = command::search_report(&self.processes, &input);
                    self.finish_command(reports);
                }
            }
            PromptKind::KillPid | PromptKind::DetailPid => match command::parse_pid(&input) {
                PidInput::Cancel => self.finish_command(vec![Report::cancelled()]),
                // Stay in the prompt so the user can retype the pid.
                PidInput::Invalid(reason) => {
                    self.set_reports(vec![Report::new(
                        ReportLevel::Error,
                        format!("Error: {reason}"),
                    )]);
                }
                PidInput::Pid(pid) if kind == PromptKind::KillPid => {
                    let reports = command::kill(&mut self.provider, &self.processes, pid);
                    self.finish_command(reports);
                }
                PidInput::Pid(pid) => match command::find_process(&self.processes, pid).cloned() {
                    Some(record) => {
                        self.set_reports(Vec::new());
                        self.input_mode = InputMode::Detail(record);
                    }
                    None => self.finish_command(vec![command::not_in_list_report(pid)]),
                },
            },
        }
    }

    /// Back to the countdown without a new capture: the table may show
    /// processes a command just acted on until the next refresh.
    fn finish_command(&mut self, reports: Vec<Report>) {
        self.set_reports(reports);
        self.prompt_input.clear();
        self.input_mode = InputMode::Normal;
        self.countdown.restart();
    }

    fn set_reports(&mut self, reports: Vec<Report>) {
        self.reports = reports;
        self.report_scroll = 0;
    }

    fn terminate(&mut self, reason: ExitReason) {
        info!(?reason, cycles = self.cycle, "monitor terminating");
        self.phase = Phase::Terminated;
        self.exit_reason = Some(reason);
        self.input_mode = InputMode::Normal;
        self.prompt_input.clear();
    }
}

/// No modifier other than Shift, so Ctrl/Alt chords never act as commands
/// or type into a prompt.
fn is_plain(key: &KeyEvent) -> bool {
    key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

fn map_key_normal(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Up => Action::ScrollReports(ScrollDirection::Up),
        KeyCode::Down => Action::ScrollReports(ScrollDirection::Down),
        KeyCode::Char(c) if is_plain(&key) => match c.to_ascii_lowercase() {
            'q' => Action::Quit,
            'h' => Action::ShowHelp,
            'r' => Action::Refresh,
            'k' => Action::BeginPrompt(PromptKind::KillPid),
            's' => Action::BeginPrompt(PromptKind::SearchName),
            'd' => Action::BeginPrompt(PromptKind::DetailPid),
            _ => Action::Ignored,
        },
        _ => Action::Ignored,
    }
}

fn map_key_prompt(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char(c) if is_plain(&key) => Action::PromptInput(c),
        KeyCode::Backspace => Action::PromptBackspace,
        KeyCode::Enter => Action::PromptSubmit,
        KeyCode::Esc => Action::PromptCancel,
        _ => Action::None,
    }
}

fn map_key_detail(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => Action::Acknowledge,
        _ => Action::None,
    }
}
