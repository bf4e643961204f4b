//! Failures talking to the forms backend.

use thiserror::Error;

use crate::traits::HttpError;

/// Result alias for backend operations.
pub type FormResult<T> = Result<T, FormError>;

#[derive(Debug, Error)]
pub enum FormError {
    /// The request never produced a response.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: HttpError,
    },

    /// The backend answered with a non-2xx status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The form definition body was not the expected JSON.
    #[error("malformed form definition from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The submission could not be serialized.
    #[error("could not encode submission: {0}")]
    Encode(#[source] serde_json::Error),

    /// The caller passed an unusable form identifier.
    #[error("invalid form id '{0}'")]
    InvalidFormId(String),
}

impl FormError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FormError::Status { status: 404, .. })
    }

    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            FormError::Transport {
                source: HttpError::Timeout(_),
                ..
            } => "E_FORM_TIMEOUT",
            FormError::Transport { .. } => "E_FORM_TRANSPORT",
            FormError::Status { status: 404, .. } => "E_FORM_NOT_FOUND",
            FormError::Status { .. } => "E_FORM_STATUS",
            FormError::Decode { .. } => "E_FORM_DECODE",
            FormError::Encode(_) => "E_FORM_ENCODE",
            FormError::InvalidFormId(_) => "E_FORM_ID",
        }
    }
}
