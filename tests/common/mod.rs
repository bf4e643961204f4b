//! Common test fixtures for integration tests.
//!
//! Forms are written as the backend's JSON so every test also goes through
//! the real decoding path.
//!
//! ```ignore
//! mod common;
//! use common::{loaded_app, two_section_form_json};
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use formwiz::adapters::mock::{MockHttpClient, MockResponse};
use formwiz::app::{App, AppMessage, Screen};
use formwiz::client::FormsClient;
use formwiz::models::FormDefinition;

pub const API_URL: &str = "http://api.test/api";
pub const FORM_ID: &str = "7";
pub const FORM_URL: &str = "http://api.test/api/forms/7/";
pub const RESPONSES_URL: &str = "http://api.test/api/form-responses/";

/// Fixed "now" for deadline checks.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Two sections: "About" with required Name, "Extras" with optional Notes.
pub fn two_section_form_json() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "title": "Recruitment Drive",
        "description": "Join the robotics club",
        "theme": "cyberpunk",
        "is_active": true,
        "closes_at": null,
        "success_message": "",
        "success_link": null,
        "success_link_label": "",
        "sections": [
            {"id": "a", "title": "About", "description": ""},
            {"id": "b", "title": "Extras", "description": "Anything else?"}
        ],
        "fields": [
            {"id": 1, "label": "Name", "field_type": "text", "required": true, "section": "a", "options": []},
            {"id": 2, "label": "Notes", "field_type": "textarea", "required": false, "section": "b", "options": []}
        ]
    })
}

/// Single implicit page with one multi-choice field.
pub fn skills_form_json() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "title": "Skills Survey",
        "fields": [
            {"id": 1, "label": "Skills", "field_type": "checkbox", "required": true, "options": ["CAD", "Code"]}
        ]
    })
}

/// Every field kind on one page.
pub fn all_kinds_form_json() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "title": "Everything",
        "theme": "midnight",
        "fields": [
            {"id": 1, "label": "Name", "field_type": "text", "required": true},
            {"id": 2, "label": "Bio", "field_type": "textarea"},
            {"id": 3, "label": "Age", "field_type": "number"},
            {"id": 4, "label": "Born", "field_type": "date"},
            {"id": 5, "label": "Track", "field_type": "select", "options": ["Hardware", "Software"]},
            {"id": 6, "label": "Year", "field_type": "radio", "options": []},
            {"id": 7, "label": "Skills", "field_type": "checkbox", "options": ["CAD", "Code"]},
            {"id": 8, "label": "Agree", "field_type": "checkbox", "required": true}
        ]
    })
}

/// `base` with the given top-level keys replaced.
pub fn with_overrides(mut base: serde_json::Value, overrides: serde_json::Value) -> serde_json::Value {
    if let (Some(base), Some(overrides)) = (base.as_object_mut(), overrides.as_object()) {
        for (key, value) in overrides {
            base.insert(key.clone(), value.clone());
        }
    }
    base
}

pub fn decode(json: serde_json::Value) -> FormDefinition {
    serde_json::from_value(json).expect("fixture decodes")
}

pub fn client_for(mock: &MockHttpClient) -> FormsClient {
    FormsClient::new(API_URL, Arc::new(mock.clone()))
}

/// An App on the wizard screen, loaded through the real fetch path with
/// `form_json` served by `mock`.
pub async fn loaded_app(mock: &MockHttpClient, form_json: serde_json::Value) -> App {
    mock.on_get(FORM_URL, MockResponse::json(200, &form_json));

    let mut app = App::new(FORM_ID, client_for(mock)).with_clock(fixed_now);
    app.start_loading();
    pump(&mut app).await;
    assert_eq!(app.screen, Screen::Wizard, "form should load");
    app
}

/// Wait for the next async message and apply it.
pub async fn pump(app: &mut App) -> AppMessage {
    let msg = {
        let rx = app.message_rx.as_mut().expect("receiver present");
        rx.recv().await.expect("message")
    };
    app.handle_message(msg.clone());
    msg
}
