use std::sync::Arc;
use std::time::Duration;

use iq_core::model::StartedAt;
use tokio::sync::Notify;

use super::test_harness::{
    Reply, ScreenKind, TEST_EMAIL, ViewHarness, fixed_millis, setup_view_harness,
};

fn filled_answer_cells(html: &str) -> usize {
    html.matches("answer-cell--on").count()
}

#[test]
fn panel_defaults_button_to_advance() {
    let harness = setup_view_harness(ScreenKind::Panel { button_text: None }, Reply::Accept);
    let html = harness.render();
    assert!(html.contains("Instructions"), "missing heading in {html}");
    assert!(html.contains("Panel body"), "missing content in {html}");
    assert!(html.contains(">Advance<"), "missing default label in {html}");
}

#[test]
fn panel_renders_custom_button_text_verbatim() {
    let harness = setup_view_harness(
        ScreenKind::Panel {
            button_text: Some("Start".to_string()),
        },
        Reply::Accept,
    );
    let html = harness.render();
    assert!(html.contains(">Start<"), "missing custom label in {html}");
    assert!(!html.contains("Advance"), "default label leaked into {html}");
}

#[test]
fn rules_screen_advances_exactly_once() {
    let mut harness = setup_view_harness(ScreenKind::Rules, Reply::Accept);
    let html = harness.render();
    assert_eq!(html.matches("<li").count(), 3, "expected three rules in {html}");

    harness.click_advance();
    assert_eq!(harness.recorder.events(), vec!["advance"]);
}

#[test]
fn practice_starts_with_empty_answer() {
    let harness = setup_view_harness(ScreenKind::Practice, Reply::Accept);
    let html = harness.render();
    assert!(html.contains("training example"), "missing copy in {html}");
    assert!(html.contains("more than once"), "missing caution in {html}");
    assert!(html.contains("only chance to practice"), "missing caution in {html}");
    assert_eq!(filled_answer_cells(&html), 0);
    assert!(!html.contains("Correct!"));
}

#[test]
fn practice_advances_once_regardless_of_answer() {
    let mut harness = setup_view_harness(ScreenKind::Practice, Reply::Accept);
    for cell in [0, 2, 4, 6, 8] {
        harness.click_answer_cell(cell);
    }
    let html = harness.render();
    assert_eq!(filled_answer_cells(&html), 5);
    assert!(html.contains("Correct!"), "solved puzzle not flagged in {html}");

    harness.click_answer_cell(4);
    assert!(!harness.render().contains("Correct!"));

    harness.click_advance();
    assert_eq!(harness.recorder.events(), vec!["advance"]);
}

#[test]
fn practice_answer_does_not_leak_between_mounts() {
    let mut first = setup_view_harness(ScreenKind::Practice, Reply::Accept);
    first.click_answer_cell(4);
    assert_eq!(filled_answer_cells(&first.render()), 1);
    drop(first);

    let second = setup_view_harness(ScreenKind::Practice, Reply::Accept);
    assert_eq!(filled_answer_cells(&second.render()), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn briefing_sets_start_time_before_request_settles() {
    let gate = Arc::new(Notify::new());
    let mut harness = setup_view_harness(ScreenKind::Briefing, Reply::Gated(Arc::clone(&gate)));
    let html = harness.render();
    assert!(html.contains(TEST_EMAIL), "missing candidate in {html}");
    assert!(html.contains(">Start<"), "missing start label in {html}");
    assert_eq!(html.matches("<li").count(), 4, "expected four rules in {html}");
    assert!(html.contains("There are 30 levels."), "missing level count in {html}");
    assert!(html.contains("cannot go back"), "missing no-backtrack rule in {html}");

    harness.click_advance();
    harness.drive_async().await;

    assert_eq!(harness.started_at(), Some(StartedAt::from_millis(fixed_millis())));
    assert_eq!(harness.requests().len(), 1);
    assert!(harness.recorder.events().is_empty());
    assert!(harness.render().contains("Starting..."));

    // A second click while in flight must not send another request.
    harness.click_advance();
    harness.drive_async().await;
    assert_eq!(harness.requests().len(), 1);

    gate.notify_one();
    harness.drive_async().await;
    harness.drive_async().await;
    assert_eq!(harness.recorder.events(), vec!["timer", "advance"]);
}

#[tokio::test(flavor = "current_thread")]
async fn briefing_posts_email_and_timestamp() {
    let mut harness = setup_view_harness(ScreenKind::Briefing, Reply::Accept);
    harness.click_advance();
    harness.drive_async().await;
    harness.drive_async().await;

    let requests = harness.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, services::Method::Post);
    assert_eq!(request.path, "/candidate/start");
    assert_eq!(request.data["email"], TEST_EMAIL);
    assert_eq!(request.data["timestamp"], fixed_millis());
    assert_eq!(harness.recorder.events(), vec!["timer", "advance"]);
}

#[tokio::test(flavor = "current_thread")]
async fn briefing_failure_offers_retry_without_starting() {
    let mut harness = setup_view_harness(ScreenKind::Briefing, Reply::Reject);
    harness.click_advance();
    harness.drive_async().await;
    harness.drive_async().await;

    assert!(harness.recorder.events().is_empty());
    assert_eq!(harness.started_at(), None);
    let html = harness.render();
    assert!(html.contains("could not start your test"), "missing error in {html}");
    assert!(html.contains(">Retry<"), "missing retry in {html}");

    harness.click_advance();
    harness.drive_async().await;
    harness.drive_async().await;
    assert_eq!(harness.requests().len(), 2);
    assert!(harness.recorder.events().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn flow_walks_every_screen_into_running() {
    let mut harness = setup_view_harness(ScreenKind::Flow, Reply::Accept);
    assert!(harness.render().contains("a 3x3 grid will be shown to you"));

    harness.click_advance();
    assert!(harness.render().contains("training example"));

    harness.click_advance();
    let html = harness.render();
    assert!(
        html.contains("You are about to begin the test as a@b.com"),
        "missing briefing in {html}"
    );
    assert!(html.contains("30 minutes"), "missing duration in {html}");

    harness.click_advance();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("The test has started"), "not running: {html}");
    assert!(html.contains("Time remaining 30:00"), "missing countdown in {html}");
    assert!(html.contains("Started at 22:13:20 UTC"), "missing start time in {html}");
    assert_eq!(harness.requests().len(), 1);
}

async fn running_flow() -> ViewHarness {
    let mut harness = setup_view_harness(ScreenKind::Flow, Reply::Accept);
    for _ in 0..3 {
        harness.click_advance();
    }
    harness.drive_async().await;
    harness.drive_async().await;
    assert!(harness.render().contains("Time remaining 30:00"));
    harness
}

async fn wait_one_tick(harness: &mut ViewHarness) {
    tokio::time::sleep(Duration::from_millis(1_100)).await;
    harness.drive_async().await;
}

#[tokio::test(flavor = "current_thread")]
async fn countdown_keeps_ticking_after_briefing_unmounts() {
    let mut harness = running_flow().await;

    wait_one_tick(&mut harness).await;
    let html = harness.render();
    assert!(html.contains("Time remaining 29:59"), "countdown stalled: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn repeated_timer_calls_do_not_speed_up_countdown() {
    let mut harness = running_flow().await;

    wait_one_tick(&mut harness).await;
    harness.call_timer();
    wait_one_tick(&mut harness).await;

    let html = harness.render();
    assert!(html.contains("Time remaining 29:58"), "countdown drifted: {html}");
}
