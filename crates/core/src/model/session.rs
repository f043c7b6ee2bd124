use serde::Serialize;

use crate::model::CandidateEmail;
use crate::time::Clock;

/// Session start time in whole milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StartedAt(i64);

impl StartedAt {
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub fn now(clock: &Clock) -> Self {
        Self(clock.now_millis())
    }

    #[must_use]
    pub fn millis(self) -> i64 {
        self.0
    }
}

/// Body of the start-of-session request: `{ "email": ..., "timestamp": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStart {
    email: CandidateEmail,
    timestamp: StartedAt,
}

impl SessionStart {
    #[must_use]
    pub fn new(email: CandidateEmail, timestamp: StartedAt) -> Self {
        Self { email, timestamp }
    }

    #[must_use]
    pub fn email(&self) -> &CandidateEmail {
        &self.email
    }

    #[must_use]
    pub fn timestamp(&self) -> StartedAt {
        self.timestamp
    }
}
