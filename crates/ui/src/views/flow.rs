#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use iq_core::model::{CandidateEmail, FlowStep, StartedAt};

use crate::context::AppContext;
use crate::views::{Instruction1, Instruction2, Instruction3};
use crate::vm::{Countdown, format_started_at};

/// Who is taking the test and when their session started.
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    email: CandidateEmail,
    started_at: Signal<Option<StartedAt>>,
}

impl SessionContext {
    #[must_use]
    pub fn new(email: CandidateEmail, started_at: Signal<Option<StartedAt>>) -> Self {
        Self { email, started_at }
    }

    #[must_use]
    pub fn email(&self) -> &CandidateEmail {
        &self.email
    }

    #[must_use]
    pub fn started_at(&self) -> Signal<Option<StartedAt>> {
        self.started_at
    }
}

/// Owns the screen sequence and mounts one screen at a time.
#[component]
pub fn FlowView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut step = use_signal(FlowStep::default);
    let started_at = use_signal(|| None::<StartedAt>);
    let mut countdown = use_signal(|| None::<Countdown>);
    let session = SessionContext::new(ctx.candidate_email().clone(), started_at);
    let duration = ctx.test_duration();

    let advance = use_callback(move |()| {
        let current = step();
        let next = current.advance();
        tracing::debug!(from = ?current, to = ?next, "advancing flow");
        step.set(next);
    });

    let timer = use_callback(move |()| {
        if countdown().is_some() {
            return;
        }
        countdown.set(Some(Countdown::new(duration)));
        spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
                let running = match &mut *countdown.write() {
                    Some(current) => current.tick(),
                    None => false,
                };
                if !running {
                    break;
                }
            }
        });
    });

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<FlowTestHandles>() {
            handles.register(timer);
        }
    }

    rsx! {
        div { class: "page",
            match step() {
                FlowStep::Welcome => rsx! {
                    Instruction1 { when_advance: advance }
                },
                FlowStep::PracticeOffered => rsx! {
                    Instruction2 { when_advance: advance }
                },
                FlowStep::Briefed => rsx! {
                    Instruction3 { when_advance: advance, timer, session }
                },
                FlowStep::Running => rsx! {
                    RunningPanel { countdown: countdown(), started_at: started_at() }
                },
            }
        }
    }
}

#[component]
fn RunningPanel(countdown: Option<Countdown>, started_at: Option<StartedAt>) -> Element {
    let label = countdown.map_or_else(String::new, Countdown::label);
    rsx! {
        section { class: "running-panel",
            h2 { class: "view-title", "The test has started" }
            if let Some(at) = started_at {
                p { class: "view-hint", "Started at {format_started_at(at)}" }
            }
            p { class: "countdown", "{label}" }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct FlowTestHandles {
    timer: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl FlowTestHandles {
    pub(crate) fn register(&self, timer: Callback<()>) {
        *self.timer.borrow_mut() = Some(timer);
    }

    pub(crate) fn timer(&self) -> Callback<()> {
        (*self.timer.borrow()).expect("flow timer registered")
    }
}
