/// Position in the pre-test screen flow. Transitions only move forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FlowStep {
    /// Static rules screen.
    #[default]
    Welcome,
    /// Free practice on the training puzzle.
    PracticeOffered,
    /// Briefing with the button that starts the timed session.
    Briefed,
    /// Timed session in progress.
    Running,
}

impl FlowStep {
    /// The step after this one. `Running` is terminal.
    #[must_use]
    pub fn advance(self) -> Self {
        match self {
            Self::Welcome => Self::PracticeOffered,
            Self::PracticeOffered => Self::Briefed,
            Self::Briefed | Self::Running => Self::Running,
        }
    }
}
