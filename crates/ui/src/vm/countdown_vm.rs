use std::time::Duration;

/// Whole seconds left in the timed session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining_secs: u64,
}

impl Countdown {
    #[must_use]
    pub fn new(total: Duration) -> Self {
        Self {
            remaining_secs: total.as_secs(),
        }
    }

    #[must_use]
    pub fn remaining_secs(self) -> u64 {
        self.remaining_secs
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        self.remaining_secs == 0
    }

    /// Take one second off. Returns whether time is still left afterwards.
    pub fn tick(&mut self) -> bool {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        !self.is_finished()
    }

    #[must_use]
    pub fn label(self) -> String {
        if self.is_finished() {
            "Time is up".to_string()
        } else {
            format!("Time remaining {}", format_countdown(self.remaining_secs))
        }
    }
}

#[must_use]
pub fn format_countdown(seconds: u64) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes:02}:{remainder:02}")
}
