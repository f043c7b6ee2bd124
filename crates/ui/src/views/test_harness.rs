use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use iq_core::model::{CandidateEmail, StartedAt};
use iq_core::time::fixed_now;
use services::{
    ApiRequest, Clock, SessionStartService, StatusCode, Transport, TransportError,
};
use tokio::sync::Notify;

use crate::context::{UiApp, build_app_context};
use crate::views::{
    FlowTestHandles, FlowView, GridTestHandles, Instruction1, Instruction2, Instruction3,
    InstructionPanel, PanelTestHandles, SessionContext,
};

pub const TEST_EMAIL: &str = "a@b.com";

/// How the fake transport answers `POST /candidate/start`.
#[derive(Clone)]
pub enum Reply {
    Accept,
    Reject,
    /// Hold the request until the gate is notified, then accept.
    Gated(Arc<Notify>),
}

#[derive(Clone)]
pub struct StubTransport {
    reply: Reply,
    pub requests: Arc<Mutex<Vec<ApiRequest>>>,
}

#[async_trait::async_trait]
impl Transport for StubTransport {
    async fn request(&self, request: ApiRequest) -> Result<(), TransportError> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Reply::Accept => Ok(()),
            Reply::Reject => Err(TransportError::HttpStatus(StatusCode::SERVICE_UNAVAILABLE)),
            Reply::Gated(gate) => {
                gate.notified().await;
                Ok(())
            }
        }
    }
}

struct TestApp {
    session_start: Arc<SessionStartService>,
}

impl UiApp for TestApp {
    fn candidate_email(&self) -> CandidateEmail {
        CandidateEmail::new(TEST_EMAIL).expect("valid test email")
    }

    fn test_duration(&self) -> Duration {
        Duration::from_secs(30 * 60)
    }

    fn level_count(&self) -> u32 {
        30
    }

    fn session_start(&self) -> Arc<SessionStartService> {
        Arc::clone(&self.session_start)
    }
}

#[derive(Clone, PartialEq)]
pub enum ScreenKind {
    Panel { button_text: Option<String> },
    Rules,
    Practice,
    Briefing,
    Flow,
}

/// Callback names in the order the screen invoked them.
#[derive(Clone, Default)]
pub struct Recorder(Rc<RefCell<Vec<&'static str>>>);

impl Recorder {
    fn push(&self, event: &'static str) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<&'static str> {
        self.0.borrow().clone()
    }
}

#[derive(Clone, Default)]
pub struct HarnessHandles {
    pub panel: PanelTestHandles,
    pub grid: GridTestHandles,
    pub flow: FlowTestHandles,
    started_at: Rc<RefCell<Option<Signal<Option<StartedAt>>>>>,
}

impl HarnessHandles {
    fn register_started_at(&self, started_at: Signal<Option<StartedAt>>) {
        *self.started_at.borrow_mut() = Some(started_at);
    }

    fn started_at(&self) -> Signal<Option<StartedAt>> {
        (*self.started_at.borrow()).expect("start time registered")
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    screen: ScreenKind,
    recorder: Recorder,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ScreenHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.panel.clone());
    use_context_provider(|| props.handles.grid.clone());
    use_context_provider(|| props.handles.flow.clone());
    let started_at = use_signal(|| None::<StartedAt>);
    props.handles.register_started_at(started_at);

    let advance_recorder = props.recorder.clone();
    let when_advance = use_callback(move |()| advance_recorder.push("advance"));
    let timer_recorder = props.recorder.clone();
    let timer = use_callback(move |()| timer_recorder.push("timer"));

    match props.screen {
        ScreenKind::Panel { button_text: Some(button_text) } => rsx! {
            InstructionPanel { when_advance, button_text, p { "Panel body" } }
        },
        ScreenKind::Panel { button_text: None } => rsx! {
            InstructionPanel { when_advance, p { "Panel body" } }
        },
        ScreenKind::Rules => rsx! { Instruction1 { when_advance } },
        ScreenKind::Practice => rsx! { Instruction2 { when_advance } },
        ScreenKind::Briefing => rsx! {
            Instruction3 {
                when_advance,
                timer,
                session: SessionContext::new(ctx.candidate_email().clone(), started_at),
            }
        },
        ScreenKind::Flow => rsx! { FlowView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub recorder: Recorder,
    pub handles: HarnessHandles,
    pub requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl ViewHarness {
    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Press the panel button of whichever screen is mounted.
    pub fn click_advance(&mut self) {
        let advance = self.handles.panel.advance();
        self.dom.in_runtime(|| advance.call(()));
        drive_dom(&mut self.dom);
    }

    pub fn click_answer_cell(&mut self, cell: usize) {
        let toggle = self.handles.grid.toggle();
        self.dom.in_runtime(|| toggle.call(cell));
        drive_dom(&mut self.dom);
    }

    /// Invoke the flow's timer callback directly, as a second start would.
    pub fn call_timer(&mut self) {
        let timer = self.handles.flow.timer();
        self.dom.in_runtime(|| timer.call(()));
        drive_dom(&mut self.dom);
    }

    pub fn started_at(&self) -> Option<StartedAt> {
        let signal = self.handles.started_at();
        self.dom.in_runtime(|| *signal.peek())
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn fixed_millis() -> i64 {
    fixed_now().timestamp_millis()
}

pub fn setup_view_harness(screen: ScreenKind, reply: Reply) -> ViewHarness {
    let transport = StubTransport {
        reply,
        requests: Arc::default(),
    };
    let requests = Arc::clone(&transport.requests);
    let session_start = Arc::new(SessionStartService::new(
        Clock::fixed(fixed_now()),
        Arc::new(transport),
    ));

    let recorder = Recorder::default();
    let handles = HarnessHandles::default();
    let mut dom = VirtualDom::new_with_props(
        ScreenHarness,
        HarnessProps {
            app: Arc::new(TestApp { session_start }),
            screen,
            recorder: recorder.clone(),
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);

    ViewHarness {
        dom,
        recorder,
        handles,
        requests,
    }
}
