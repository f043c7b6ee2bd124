#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    StartFailed,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::StartFailed => {
                "We could not start your test. Check your connection and try again."
            }
        }
    }
}

/// Progress of the briefing screen's start request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StartState {
    #[default]
    Idle,
    Starting,
    Failed(ViewError),
}

impl StartState {
    #[must_use]
    pub fn button_label(self) -> &'static str {
        match self {
            StartState::Idle => "Start",
            StartState::Starting => "Starting...",
            StartState::Failed(_) => "Retry",
        }
    }

    #[must_use]
    pub fn is_busy(self) -> bool {
        matches!(self, StartState::Starting)
    }
}
