//! FormsClient against a real HTTP server using wiremock.
//!
//! These go through `ReqwestHttpClient`, so routes, headers, body encoding
//! and status handling are all exercised on the wire.

mod common;

use std::sync::Arc;
use std::time::Duration;

use formwiz::adapters::ReqwestHttpClient;
use formwiz::client::FormsClient;
use formwiz::error::FormError;
use formwiz::models::{AnswerState, AnswerValue, FieldKind, FormSubmission, Theme};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> FormsClient {
    FormsClient::new(
        format!("{}/api/", server.uri()),
        Arc::new(ReqwestHttpClient::new()),
    )
}

#[tokio::test]
async fn test_fetch_form_decodes_definition() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/forms/7/"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::all_kinds_form_json()))
        .expect(1)
        .mount(&server)
        .await;

    let form = client_for(&server).fetch_form("7").await.unwrap();

    assert_eq!(form.id, "7");
    assert_eq!(form.title, "Everything");
    assert_eq!(form.theme, Theme::Midnight);
    assert_eq!(form.fields.len(), 8);
    assert_eq!(
        form.field_by_label("Skills").map(|f| &f.kind),
        Some(&FieldKind::MultiChoice {
            options: vec!["CAD".into(), "Code".into()]
        })
    );
    assert_eq!(
        form.field_by_label("Agree").map(|f| &f.kind),
        Some(&FieldKind::Toggle)
    );
}

#[tokio::test]
async fn test_fetch_form_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/forms/99/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({"detail": "Not found."})))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_form("99").await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.error_code(), "E_FORM_NOT_FOUND");
}

#[tokio::test]
async fn test_fetch_form_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/forms/7/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_form("7").await.unwrap_err();

    assert!(matches!(err, FormError::Status { status: 500, .. }));
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_fetch_form_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/forms/7/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_form("7").await.unwrap_err();

    assert!(matches!(err, FormError::Decode { .. }));
    assert_eq!(err.error_code(), "E_FORM_DECODE");
}

#[tokio::test]
async fn test_fetch_form_rejects_bad_id_without_request() {
    let server = MockServer::start().await;

    let err = client_for(&server).fetch_form("7/../x").await.unwrap_err();

    assert!(matches!(err, FormError::InvalidFormId(_)));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_submit_response_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/form-responses/"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({
            "form": "7",
            "data": {"Name": "Ada", "Skills": ["Code"], "Agree": true}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let data = AnswerState::default()
        .with_answer("Name", AnswerValue::Text("Ada".into()))
        .with_answer("Skills", AnswerValue::Choices(vec!["Code".into()]))
        .with_answer("Agree", AnswerValue::Flag(true));
    let submission = FormSubmission {
        form: "7".to_string(),
        data,
    };

    let result = client_for(&server).submit_response(&submission).await;
    assert!(result.is_ok(), "Expected Ok, got Err: {:?}", result);
}

#[tokio::test]
async fn test_submit_response_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/form-responses/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({"form": ["Form is closed."]})))
        .mount(&server)
        .await;

    let submission = FormSubmission {
        form: "7".to_string(),
        data: AnswerState::default(),
    };
    let err = client_for(&server)
        .submit_response(&submission)
        .await
        .unwrap_err();

    assert!(matches!(err, FormError::Status { status: 400, .. }));
    assert_eq!(err.error_code(), "E_FORM_STATUS");
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/forms/7/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::skills_form_json())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let http = ReqwestHttpClient::with_timeout(Duration::from_millis(100)).unwrap();
    let client = FormsClient::new(format!("{}/api", server.uri()), Arc::new(http));

    let err = client.fetch_form("7").await.unwrap_err();
    assert_eq!(err.error_code(), "E_FORM_TIMEOUT");
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // Nothing listens on port 9 on a test host.
    let client = FormsClient::new("http://127.0.0.1:9/api", Arc::new(ReqwestHttpClient::new()));

    let err = client.fetch_form("7").await.unwrap_err();
    assert!(matches!(err, FormError::Transport { .. }));
}
