//! End-to-end wizard flows through `App`, with the backend mocked.
//!
//! Each test loads a form over the mock HTTP client, drives the wizard with
//! key events, and checks the requests that reached the backend.

mod common;

use common::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use formwiz::adapters::mock::{MockHttpClient, MockResponse};
use formwiz::app::{App, AppMessage, Screen};
use formwiz::models::{AnswerValue, ClosedReason};
use formwiz::state::{ViewPhase, SUBMIT_REJECTED_MESSAGE};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn cursor(app: &App) -> usize {
    app.session.as_ref().unwrap().cursor()
}

fn error(app: &App) -> Option<String> {
    app.session.as_ref().unwrap().error().map(String::from)
}

#[tokio::test]
async fn test_two_section_happy_path() {
    let mock = MockHttpClient::new();
    mock.on_post(RESPONSES_URL, MockResponse::status(201));
    let mut app = loaded_app(&mock, two_section_form_json()).await;

    // Empty Name blocks the advance.
    press(&mut app, KeyCode::PageDown);
    assert_eq!(cursor(&app), 0);
    assert_eq!(error(&app).as_deref(), Some("Requirement Not Met: Name"));

    type_text(&mut app, "Ada");
    press(&mut app, KeyCode::PageDown);
    assert_eq!(cursor(&app), 1);
    assert_eq!(error(&app), None);

    app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
    assert!(app.submitting);
    let msg = pump(&mut app).await;
    assert!(matches!(msg, AppMessage::SubmitSucceeded { .. }));

    let posts = mock.requests_with_method("POST");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].url, RESPONSES_URL);
    assert_eq!(
        posts[0].json_body(),
        Some(serde_json::json!({"form": "7", "data": {"Name": "Ada", "Notes": ""}}))
    );
    assert_eq!(app.phase(), Some(ViewPhase::Submitted));
    assert!(!app.submitting);
}

#[tokio::test]
async fn test_submit_on_non_final_page_never_posts() {
    let mock = MockHttpClient::new();
    let mut app = loaded_app(&mock, two_section_form_json()).await;

    type_text(&mut app, "Ada");
    // Enter on a short-text field is a submit, which only advances here.
    press(&mut app, KeyCode::Enter);

    assert_eq!(cursor(&app), 1);
    assert!(!app.submitting);
    assert!(mock.requests_with_method("POST").is_empty());
}

#[tokio::test]
async fn test_final_validation_names_field_from_earlier_page() {
    let mock = MockHttpClient::new();
    let mut app = loaded_app(&mock, two_section_form_json()).await;

    type_text(&mut app, "A");
    press(&mut app, KeyCode::PageDown);
    assert_eq!(cursor(&app), 1);

    // Name is emptied after the page was already passed.
    app.session
        .as_mut()
        .unwrap()
        .set_answer("Name", AnswerValue::Text(String::new()));

    app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
    assert_eq!(
        error(&app).as_deref(),
        Some("Incomplete Transmission: Name")
    );
    assert_eq!(cursor(&app), 1);
    assert!(!app.submitting);
    assert!(mock.requests_with_method("POST").is_empty());
}

#[tokio::test]
async fn test_rejected_submit_keeps_answers_and_allows_retry() {
    let mock = MockHttpClient::new();
    mock.on_post(RESPONSES_URL, MockResponse::status(400));
    let mut app = loaded_app(&mock, two_section_form_json()).await;

    type_text(&mut app, "Ada");
    press(&mut app, KeyCode::PageDown);
    app.request_submit();
    pump(&mut app).await;

    assert_eq!(error(&app).as_deref(), Some(SUBMIT_REJECTED_MESSAGE));
    assert_eq!(app.phase(), Some(ViewPhase::Active));
    assert_eq!(
        app.session.as_ref().unwrap().answer("Name"),
        Some(&AnswerValue::Text("Ada".into()))
    );

    mock.on_post(RESPONSES_URL, MockResponse::status(200));
    app.request_submit();
    pump(&mut app).await;
    assert_eq!(app.phase(), Some(ViewPhase::Submitted));
    assert_eq!(mock.requests_with_method("POST").len(), 2);
}

#[tokio::test]
async fn test_skills_check_and_uncheck() {
    let mock = MockHttpClient::new();
    mock.on_post(RESPONSES_URL, MockResponse::status(201));
    let mut app = loaded_app(&mock, skills_form_json()).await;

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Char(' '));

    assert_eq!(
        app.session.as_ref().unwrap().answer("Skills"),
        Some(&AnswerValue::Choices(vec!["Code".to_string()]))
    );

    app.request_submit();
    pump(&mut app).await;
    assert_eq!(
        mock.requests_with_method("POST")[0].json_body(),
        Some(serde_json::json!({"form": "7", "data": {"Skills": ["Code"]}}))
    );
}

#[tokio::test]
async fn test_inactive_form_shows_closed_view_and_blocks_submit() {
    let mock = MockHttpClient::new();
    let json = with_overrides(two_section_form_json(), serde_json::json!({"is_active": false}));
    let mut app = loaded_app(&mock, json).await;

    assert_eq!(app.phase(), Some(ViewPhase::Closed(ClosedReason::Inactive)));

    // Typing and submit are inert; q exits.
    type_text(&mut app, "Ada");
    app.request_submit();
    assert!(mock.requests_with_method("POST").is_empty());
    assert_eq!(
        app.session.as_ref().unwrap().answer("Name"),
        Some(&AnswerValue::Text(String::new()))
    );
    assert!(!app.should_quit);

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_elapsed_deadline_shows_closed_view() {
    let mock = MockHttpClient::new();
    let json = with_overrides(
        two_section_form_json(),
        serde_json::json!({"closes_at": "2025-05-31T00:00:00Z"}),
    );
    let app = loaded_app(&mock, json).await;

    assert!(matches!(
        app.phase(),
        Some(ViewPhase::Closed(ClosedReason::Deadline(_)))
    ));
}

#[tokio::test]
async fn test_missing_form_shows_not_found() {
    let mock = MockHttpClient::new();
    mock.on_get(FORM_URL, MockResponse::status(404));
    let mut app = App::new(FORM_ID, client_for(&mock)).with_clock(fixed_now);

    app.start_loading();
    let msg = pump(&mut app).await;

    assert!(matches!(
        msg,
        AppMessage::FormLoadFailed {
            code: "E_FORM_NOT_FOUND",
            ..
        }
    ));
    assert_eq!(app.screen, Screen::NotFound);
    assert!(app.session.is_none());
    assert_eq!(mock.requests().len(), 1);
}

#[tokio::test]
async fn test_required_toggle_left_unchecked_submits_false() {
    let mock = MockHttpClient::new();
    mock.on_post(RESPONSES_URL, MockResponse::status(201));
    let json = serde_json::json!({
        "id": 7,
        "title": "Consent",
        "fields": [{"id": 1, "label": "Agree", "field_type": "checkbox", "required": true}]
    });
    let mut app = loaded_app(&mock, json).await;

    app.request_submit();
    pump(&mut app).await;
    assert_eq!(
        mock.requests_with_method("POST")[0].json_body(),
        Some(serde_json::json!({"form": "7", "data": {"Agree": false}}))
    );
}

#[tokio::test]
async fn test_submitted_view_enter_without_link_exits() {
    let mock = MockHttpClient::new();
    mock.on_post(RESPONSES_URL, MockResponse::status(201));
    let mut app = loaded_app(&mock, skills_form_json()).await;

    press(&mut app, KeyCode::Char(' '));
    app.request_submit();
    pump(&mut app).await;
    assert_eq!(app.phase(), Some(ViewPhase::Submitted));

    press(&mut app, KeyCode::Enter);
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_required_multi_choice_left_empty_submits_empty_list() {
    let mock = MockHttpClient::new();
    mock.on_post(RESPONSES_URL, MockResponse::status(201));
    let mut app = loaded_app(&mock, skills_form_json()).await;

    app.request_submit();
    assert_eq!(error(&app), None);
    pump(&mut app).await;

    assert_eq!(
        mock.requests_with_method("POST")[0].json_body(),
        Some(serde_json::json!({"form": "7", "data": {"Skills": []}}))
    );
    assert_eq!(app.phase(), Some(ViewPhase::Submitted));
}
