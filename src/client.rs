//! Client for the forms backend.
//!
//! Two calls only: fetch a form definition and post a response. Neither is
//! retried; a failure is reported to the caller once.

use std::sync::Arc;

use crate::error::{FormError, FormResult};
use crate::models::{FormDefinition, FormSubmission};
use crate::traits::{Headers, HttpClient};

/// Thin wrapper around an [`HttpClient`] that knows the backend's routes.
#[derive(Clone)]
pub struct FormsClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl FormsClient {
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn form_url(&self, form_id: &str) -> String {
        format!("{}/forms/{}/", self.base_url, form_id)
    }

    pub fn responses_url(&self) -> String {
        format!("{}/form-responses/", self.base_url)
    }

    fn json_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }

    /// `GET /forms/{id}/`.
    pub async fn fetch_form(&self, form_id: &str) -> FormResult<FormDefinition> {
        let form_id = form_id.trim();
        if form_id.is_empty() || form_id.contains('/') {
            return Err(FormError::InvalidFormId(form_id.to_string()));
        }

        let url = self.form_url(form_id);
        tracing::debug!("Fetching form definition from {}", url);

        let response = self
            .http
            .get(&url, &Self::json_headers())
            .await
            .map_err(|source| FormError::Transport {
                url: url.clone(),
                source,
            })?;

        if !response.is_success() {
            return Err(FormError::Status {
                url,
                status: response.status,
            });
        }

        let definition: FormDefinition = response
            .json()
            .map_err(|source| FormError::Decode { url, source })?;

        for label in definition.duplicate_labels() {
            tracing::warn!(
                "Form {} has more than one field labelled '{}'; they share an answer",
                definition.id,
                label
            );
        }

        Ok(definition)
    }

    /// `POST /form-responses/`. Any 2xx is success; the body is ignored.
    pub async fn submit_response(&self, submission: &FormSubmission) -> FormResult<()> {
        let url = self.responses_url();
        let body = serde_json::to_string(submission).map_err(FormError::Encode)?;

        let response = self
            .http
            .post(&url, &body, &Self::json_headers())
            .await
            .map_err(|source| FormError::Transport {
                url: url.clone(),
                source,
            })?;

        if !response.is_success() {
            return Err(FormError::Status {
                url,
                status: response.status,
            });
        }

        Ok(())
    }
}

impl std::fmt::Debug for FormsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormsClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::models::AnswerState;
    use crate::traits::HttpError;

    fn client_with(mock: &MockHttpClient) -> FormsClient {
        FormsClient::new("http://api.test/api/", Arc::new(mock.clone()))
    }

    #[test]
    fn test_urls_strip_trailing_slash() {
        let client = client_with(&MockHttpClient::new());
        assert_eq!(client.base_url(), "http://api.test/api");
        assert_eq!(client.form_url("7"), "http://api.test/api/forms/7/");
        assert_eq!(client.responses_url(), "http://api.test/api/form-responses/");
    }

    #[tokio::test]
    async fn test_fetch_form_success() {
        let mock = MockHttpClient::new();
        mock.on_get(
            "http://api.test/api/forms/7/",
            MockResponse::json(
                200,
                &serde_json::json!({"id": 7, "title": "Drive", "fields": []}),
            ),
        );

        let form = client_with(&mock).fetch_form("7").await.unwrap();
        assert_eq!(form.id, "7");
        assert_eq!(form.title, "Drive");
    }

    #[tokio::test]
    async fn test_fetch_form_not_found() {
        let mock = MockHttpClient::new();
        mock.on_get("http://api.test/api/forms/8/", MockResponse::status(404));

        let err = client_with(&mock).fetch_form("8").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_fetch_form_malformed_body() {
        let mock = MockHttpClient::new();
        mock.on_get(
            "http://api.test/api/forms/9/",
            MockResponse::json(200, &serde_json::json!({"unexpected": true})),
        );

        let err = client_with(&mock).fetch_form("9").await.unwrap_err();
        assert!(matches!(err, FormError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_fetch_form_rejects_bad_id_without_request() {
        let mock = MockHttpClient::new();
        let err = client_with(&mock).fetch_form("../admin").await.unwrap_err();
        assert!(matches!(err, FormError::InvalidFormId(_)));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_submit_posts_payload() {
        let mock = MockHttpClient::new();
        mock.on_post(
            "http://api.test/api/form-responses/",
            MockResponse::status(201),
        );

        let submission = FormSubmission {
            form: "7".to_string(),
            data: AnswerState::default()
                .with_answer("Name", crate::models::AnswerValue::Text("Ada".into())),
        };
        client_with(&mock).submit_response(&submission).await.unwrap();

        let posts = mock.requests_with_method("POST");
        assert_eq!(posts.len(), 1);
        assert_eq!(
            posts[0].json_body(),
            Some(serde_json::json!({"form": "7", "data": {"Name": "Ada"}}))
        );
        assert_eq!(
            posts[0].headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn test_submit_rejection_and_transport_error() {
        let mock = MockHttpClient::new();
        mock.on_post(
            "http://api.test/api/form-responses/",
            MockResponse::status(400),
        );
        let submission = FormSubmission {
            form: "7".to_string(),
            data: AnswerState::default(),
        };
        let err = client_with(&mock)
            .submit_response(&submission)
            .await
            .unwrap_err();
        assert!(matches!(err, FormError::Status { status: 400, .. }));

        mock.on_post(
            "http://api.test/api/form-responses/",
            MockResponse::Error(HttpError::ConnectionFailed("refused".into())),
        );
        let err = client_with(&mock)
            .submit_response(&submission)
            .await
            .unwrap_err();
        assert!(matches!(err, FormError::Transport { .. }));
    }
}
