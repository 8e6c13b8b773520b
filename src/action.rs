#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    KillPid,
    SearchName,
    DetailPid,
}

impl PromptKind {
    pub fn label(self) -> &'static str {
        match self {
            PromptKind::KillPid | PromptKind::DetailPid => "Enter PID: ",
            PromptKind::SearchName => "Enter process name to search: ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Interrupt,
    Refresh,
    ShowHelp,
    BeginPrompt(PromptKind),
    PromptInput(char),
    PromptBackspace,
    PromptSubmit,
    PromptCancel,
    Acknowledge,
    /// Moves the output pane window; like any key it restarts the countdown.
    ScrollReports(ScrollDirection),
    /// A key with no binding; it still cuts the countdown short.
    Ignored,
    None,
}
