use dioxus::prelude::*;
use iq_core::model::StartedAt;
use services::SessionStartHooks;

use super::InstructionPanel;
use crate::context::AppContext;
use crate::views::{SessionContext, StartState, ViewError};

/// Routes the start sequence's side effects to the flow controller.
struct BriefingHooks {
    started_at: Signal<Option<StartedAt>>,
    timer: EventHandler<()>,
    when_advance: EventHandler<()>,
}

impl SessionStartHooks for BriefingHooks {
    fn set_start_time(&mut self, started_at: Option<StartedAt>) {
        self.started_at.set(started_at);
    }

    fn start_timer(&mut self) {
        self.timer.call(());
    }

    fn advance(&mut self) {
        self.when_advance.call(());
    }
}

/// Last screen before the test: clicking Start records the start time,
/// tells the server, then starts the countdown and advances.
#[component]
pub fn Instruction3(
    when_advance: EventHandler<()>,
    timer: EventHandler<()>,
    session: SessionContext,
) -> Element {
    let ctx = use_context::<AppContext>();
    let mut start_state = use_signal(StartState::default);
    let minutes = ctx.test_duration().as_secs() / 60;
    let levels = ctx.level_count();
    let email = session.email().clone();

    let starter = ctx.session_start();
    let start = use_callback(move |()| {
        if start_state().is_busy() {
            return;
        }
        start_state.set(StartState::Starting);

        let starter = starter.clone();
        let email = session.email().clone();
        let mut hooks = BriefingHooks {
            started_at: session.started_at(),
            timer,
            when_advance,
        };
        spawn(async move {
            // On success the flow has already advanced past this screen.
            if starter.start(&email, &mut hooks).await.is_err() {
                start_state.set(StartState::Failed(ViewError::StartFailed));
            }
        });
    });

    let state = start_state();
    rsx! {
        InstructionPanel {
            when_advance: start,
            button_text: state.button_label().to_string(),
            disabled: state.is_busy(),
            p { "You are about to begin the test as {email}." }
            ol { class: "instruction-rules",
                li { "There are {levels} levels." }
                li { "You will have {minutes} minutes to complete them." }
                li {
                    "Make sure your answer is correct. Once you advance past a level "
                    "you cannot go back."
                }
                li {
                    "After you click the 'Start' button a timer begins and there is "
                    "no going back."
                }
            }
            if let StartState::Failed(err) = state {
                p { class: "instruction-error", role: "alert", "{err.message()}" }
            }
        }
    }
}
