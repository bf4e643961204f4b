//! AppMessage enum for async communication within the application.

use crate::models::FormDefinition;

/// Results of spawned network tasks, tagged with the request id they were
/// started under so late arrivals can be discarded.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Form definition fetched and decoded
    FormLoaded {
        request_id: u64,
        definition: Box<FormDefinition>,
    },
    /// Fetch failed for any reason
    FormLoadFailed {
        request_id: u64,
        error: String,
        code: &'static str,
    },
    /// Backend accepted the response
    SubmitSucceeded { request_id: u64 },
    /// Backend rejected the response or could not be reached
    SubmitFailed {
        request_id: u64,
        error: String,
        code: &'static str,
    },
}

impl AppMessage {
    pub fn request_id(&self) -> u64 {
        match self {
            AppMessage::FormLoaded { request_id, .. }
            | AppMessage::FormLoadFailed { request_id, .. }
            | AppMessage::SubmitSucceeded { request_id }
            | AppMessage::SubmitFailed { request_id, .. } => *request_id,
        }
    }
}
