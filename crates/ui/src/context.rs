use std::sync::Arc;
use std::time::Duration;

use iq_core::model::CandidateEmail;
use services::SessionStartService;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn candidate_email(&self) -> CandidateEmail;
    fn test_duration(&self) -> Duration;
    fn level_count(&self) -> u32;

    fn session_start(&self) -> Arc<SessionStartService>;
}

#[derive(Clone)]
pub struct AppContext {
    candidate_email: CandidateEmail,
    test_duration: Duration,
    level_count: u32,

    session_start: Arc<SessionStartService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            candidate_email: app.candidate_email(),
            test_duration: app.test_duration(),
            level_count: app.level_count(),
            session_start: app.session_start(),
        }
    }

    #[must_use]
    pub fn candidate_email(&self) -> &CandidateEmail {
        &self.candidate_email
    }

    /// Length of the timed session started from the briefing screen.
    #[must_use]
    pub fn test_duration(&self) -> Duration {
        self.test_duration
    }

    /// Number of scored levels in the test.
    #[must_use]
    pub fn level_count(&self) -> u32 {
        self.level_count
    }

    #[must_use]
    pub fn session_start(&self) -> Arc<SessionStartService> {
        Arc::clone(&self.session_start)
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
