//! Tests for the review TUI application model.

use std::sync::Arc;

use bubbletea_rs::Model;
use crossterm::event::{KeyCode, KeyModifiers};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use unicode_width::UnicodeWidthStr;

use super::*;
use crate::gateway::MockReviewItemGateway;
use crate::review::{FetchState, ReviewStatus, TransportError};
use crate::telemetry::test_support::RecordingTelemetrySink;
use crate::tui::components::DECISION_CONTROLS;

fn inbox_payload() -> Value {
    json!([
        {
            "record": { "id": "m1", "subject": "Lunch on Friday?", "sender": "pat@example.com" }
        },
        {
            "record": { "id": "m2", "subject": "Invoice overdue", "sender": "billing@vendor.test" },
            "classification": {
                "summary": "Vendor chasing payment",
                "category": "billing",
                "sentiment": "negative",
                "priority": "high",
                "urgency_score": 9
            },
            "draft": { "body": "Payment goes out today." }
        },
        {
            "record": { "id": "m3", "subject": "Q3 Report", "sender": "boss@example.com" },
            "classification": {
                "summary": "ask for extension",
                "category": "work",
                "sentiment": "neutral",
                "priority": "high",
                "urgency_score": 4
            },
            "draft": { "body": "Sure, I can extend..." }
        }
    ])
}

fn app_with_response(response: Result<String, TransportError>) -> ReviewApp {
    let mut gateway = MockReviewItemGateway::new();
    gateway
        .expect_fetch_review_items()
        .times(1)
        .return_once(move || response);
    ReviewApp::new(FetchCoordinator::new(Arc::new(gateway)))
}

async fn activate_and_load(app: &mut ReviewApp) {
    let cmd = app.activate().expect("first activation should start a load");
    let msg = cmd.await.expect("load should report back");
    app.update(msg);
}

#[fixture]
fn telemetry() -> Arc<RecordingTelemetrySink> {
    Arc::new(RecordingTelemetrySink::default())
}

async fn loaded_app(telemetry: &Arc<RecordingTelemetrySink>) -> ReviewApp {
    let sink: Arc<dyn TelemetrySink> = Arc::clone(telemetry) as Arc<dyn TelemetrySink>;
    let mut app = app_with_response(Ok(inbox_payload().to_string())).with_telemetry(sink);
    activate_and_load(&mut app).await;
    app
}

fn status_of(app: &ReviewApp, key: &str) -> Option<ReviewStatus> {
    app.snapshot()
        .item(&ItemKey::new(key))
        .map(crate::review::ReviewItem::status)
}

#[test]
fn idle_app_renders_waiting_indication() {
    let mut gateway = MockReviewItemGateway::new();
    gateway.expect_fetch_review_items().never();
    let app = ReviewApp::new(FetchCoordinator::new(Arc::new(gateway)));

    assert_eq!(app.snapshot().fetch_state(), &FetchState::Idle);
    assert!(app.view().contains("Loading review items..."));
}

#[tokio::test]
async fn activation_loads_exactly_once() {
    let mut app = app_with_response(Ok(inbox_payload().to_string()));

    let cmd = app.activate().expect("first activation should start a load");
    assert_eq!(app.snapshot().fetch_state(), &FetchState::Loading);
    assert!(app.view().contains("Loading review items..."));
    assert!(app.activate().is_none(), "second activation must not reload");

    let msg = cmd.await.expect("load should report back");
    app.update(msg);

    assert_eq!(app.snapshot().fetch_state(), &FetchState::Loaded);
    assert_eq!(app.snapshot().items().len(), 3);
}

#[tokio::test]
async fn failed_load_shows_cause_without_controls() {
    let mut app = app_with_response(Err(TransportError::Unreachable {
        message: "connection refused".to_owned(),
    }))
    .with_size(120, 24);
    activate_and_load(&mut app).await;

    let view = app.view();
    assert!(view.contains("Could not load review items."));
    assert!(view.contains("could not reach review source: connection refused"));
    assert!(!view.contains(DECISION_CONTROLS));
    assert!(app.snapshot().items().is_empty());
}

#[tokio::test]
async fn empty_load_renders_nothing_to_review() {
    let mut app = app_with_response(Ok("[]".to_owned()));
    activate_and_load(&mut app).await;

    let view = app.view();
    assert!(view.contains("Nothing to review."));
    assert!(!view.contains("Loading"));
}

#[rstest]
#[tokio::test]
async fn loaded_view_shows_controls_only_for_drafts(telemetry: Arc<RecordingTelemetrySink>) {
    let app = loaded_app(&telemetry).await.with_size(100, 60);

    let view = app.view();
    assert!(view.contains("Lunch on Friday?"));
    assert!(view.contains("Payment goes out today."));
    assert_eq!(view.matches(DECISION_CONTROLS).count(), 2);
    assert!(view.contains("3 items: 3 pending, 0 approved, 0 rejected"));
    assert!(view.contains("| billing 1, work 1"));
}

#[rstest]
#[tokio::test]
async fn load_completion_is_recorded(telemetry: Arc<RecordingTelemetrySink>) {
    let _app = loaded_app(&telemetry).await;

    let events = telemetry.take();
    assert!(matches!(
        events.as_slice(),
        [TelemetryEvent::ReviewLoadCompleted { item_count: 3, .. }]
    ));
}

#[rstest]
#[tokio::test]
async fn approving_selected_draft_is_terminal(telemetry: Arc<RecordingTelemetrySink>) {
    let mut app = loaded_app(&telemetry).await;
    let _load_events = telemetry.take();

    app.handle_message(&AppMsg::CursorDown);
    app.handle_message(&AppMsg::ApproveSelected);
    assert_eq!(status_of(&app, "m2"), Some(ReviewStatus::Approved));
    assert_eq!(status_of(&app, "m3"), Some(ReviewStatus::Pending));

    app.handle_message(&AppMsg::RejectSelected);
    assert_eq!(status_of(&app, "m2"), Some(ReviewStatus::Approved));
    assert_eq!(app.notice(), Some("review item `m2` is already approved"));

    assert_eq!(
        telemetry.take(),
        vec![TelemetryEvent::ReviewDecisionRecorded {
            key: "m2".to_owned(),
            status: "approved".to_owned(),
        }]
    );
    assert!(app.view().contains("1 approved"));
}

#[rstest]
#[tokio::test]
async fn items_without_draft_cannot_be_decided(telemetry: Arc<RecordingTelemetrySink>) {
    let mut app = loaded_app(&telemetry).await;
    let _load_events = telemetry.take();

    app.handle_message(&AppMsg::ApproveSelected);

    assert_eq!(status_of(&app, "m1"), Some(ReviewStatus::Pending));
    assert_eq!(
        app.notice(),
        Some("\"Lunch on Friday?\" has no draft to approve")
    );
    assert!(telemetry.take().is_empty());
}

#[rstest]
#[tokio::test]
async fn next_pending_follows_urgency(telemetry: Arc<RecordingTelemetrySink>) {
    let mut app = loaded_app(&telemetry).await;

    app.handle_message(&AppMsg::NextPending);
    assert_eq!(app.selected_key(), Some(ItemKey::new("m2")));

    app.handle_message(&AppMsg::RejectSelected);
    app.handle_message(&AppMsg::NextPending);
    assert_eq!(app.selected_key(), Some(ItemKey::new("m3")));

    app.handle_message(&AppMsg::ApproveSelected);
    app.handle_message(&AppMsg::NextPending);
    assert_eq!(app.selected_key(), Some(ItemKey::new("m3")));
    assert_eq!(app.notice(), Some("No pending drafts left to review"));
}

#[rstest]
#[tokio::test]
async fn cursor_stays_within_items(telemetry: Arc<RecordingTelemetrySink>) {
    let mut app = loaded_app(&telemetry).await;

    app.handle_message(&AppMsg::CursorUp);
    assert_eq!(app.cursor_position(), 0);

    app.handle_message(&AppMsg::End);
    assert_eq!(app.cursor_position(), 2);

    app.handle_message(&AppMsg::CursorDown);
    assert_eq!(app.cursor_position(), 2);

    app.handle_message(&AppMsg::Home);
    assert_eq!(app.cursor_position(), 0);
}

#[rstest]
#[tokio::test]
async fn frame_fits_terminal(telemetry: Arc<RecordingTelemetrySink>) {
    let mut app = loaded_app(&telemetry).await;
    app.handle_message(&AppMsg::WindowResized {
        width: 30,
        height: 8,
    });
    app.handle_message(&AppMsg::End);

    let view = app.view();
    let lines: Vec<&str> = view.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines.iter().all(|line| UnicodeWidthStr::width(*line) == 29));
    assert!(
        view.contains("> [PENDING] Q3 Report"),
        "selected card should be scrolled into view:\n{view}"
    );
}

#[test]
fn quitting_closes_the_session() {
    let mut gateway = MockReviewItemGateway::new();
    gateway.expect_fetch_review_items().never();
    let mut app = ReviewApp::new(FetchCoordinator::new(Arc::new(gateway)));

    let cmd = app.handle_message(&AppMsg::Quit);

    assert!(cmd.is_some());
    assert!(app.is_closed());
}

#[test]
fn any_key_closes_help() {
    let mut gateway = MockReviewItemGateway::new();
    gateway.expect_fetch_review_items().never();
    let mut app = ReviewApp::new(FetchCoordinator::new(Arc::new(gateway)));

    app.handle_message(&AppMsg::ToggleHelp);
    assert!(app.view().contains("Keyboard Shortcuts"));

    app.update(Box::new(bubbletea_rs::event::KeyMsg {
        key: KeyCode::Char('z'),
        modifiers: KeyModifiers::empty(),
    }));
    assert!(!app.show_help);
    assert!(!app.is_closed());
}
