use std::sync::Arc;

use iq_core::model::{CandidateEmail, SessionStart, StartedAt};

use crate::error::SessionStartError;
use crate::transport::{ApiRequest, Transport};
use crate::Clock;

/// API path that marks the beginning of a candidate's timed session.
pub const START_PATH: &str = "/candidate/start";

/// Side effects the start sequence drives, in the order it drives them.
pub trait SessionStartHooks {
    /// Record the session start time; `None` rolls back an optimistic write.
    fn set_start_time(&mut self, started_at: Option<StartedAt>);
    /// Begin the visible countdown.
    fn start_timer(&mut self);
    /// Move to the first test level.
    fn advance(&mut self);
}

/// Runs the "Start" button sequence against the candidate API.
#[derive(Clone)]
pub struct SessionStartService {
    clock: Clock,
    transport: Arc<dyn Transport>,
}

impl SessionStartService {
    #[must_use]
    pub fn new(clock: Clock, transport: Arc<dyn Transport>) -> Self {
        Self { clock, transport }
    }

    /// Start the timed session for `email`.
    ///
    /// The start time is written through `hooks` before the request is sent.
    /// Only after the server accepts it are the timer started and the flow
    /// advanced. On failure the start time is reset to `None` and neither
    /// the timer nor the advance hook runs.
    ///
    /// # Errors
    ///
    /// Returns `SessionStartError` when the start request cannot be delivered.
    pub async fn start<H: SessionStartHooks>(
        &self,
        email: &CandidateEmail,
        hooks: &mut H,
    ) -> Result<SessionStart, SessionStartError> {
        let started_at = StartedAt::now(&self.clock);
        hooks.set_start_time(Some(started_at));

        let record = SessionStart::new(email.clone(), started_at);
        if let Err(err) = self.announce(&record).await {
            tracing::warn!(
                email = %email,
                timestamp = started_at.millis(),
                error = %err,
                "session start was not acknowledged"
            );
            hooks.set_start_time(None);
            return Err(err);
        }

        tracing::info!(
            email = %email,
            timestamp = started_at.millis(),
            "session started"
        );
        hooks.start_timer();
        hooks.advance();
        Ok(record)
    }

    /// Send a single `POST /candidate/start` for `record`.
    ///
    /// # Errors
    ///
    /// Returns `SessionStartError` for encoding or transport failures.
    pub async fn announce(&self, record: &SessionStart) -> Result<(), SessionStartError> {
        let data = serde_json::to_value(record)?;
        tracing::debug!(path = START_PATH, "sending session start");
        self.transport
            .request(ApiRequest::post(START_PATH, data))
            .await?;
        Ok(())
    }
}
