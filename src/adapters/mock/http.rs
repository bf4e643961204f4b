//! Recording HTTP client for tests.
//!
//! Responses are keyed by method and exact URL. Every call is recorded so
//! tests can assert on what was (or was not) sent to the backend.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A request seen by [`MockHttpClient`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub headers: Headers,
    pub body: Option<String>,
}

impl RecordedRequest {
    /// Parse the recorded body as JSON, if there is one.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

/// Canned outcome for one method/URL pair.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
}

impl MockResponse {
    /// Shorthand for a JSON response with the given status.
    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        MockResponse::Success(Response::new(status, value.to_string()))
    }

    pub fn status(status: u16) -> Self {
        MockResponse::Success(Response::new(status, ""))
    }
}

/// Shared-state mock; clones see the same responses and request log.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<(String, String), MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_get(&self, url: &str, response: MockResponse) {
        self.set_response("GET", url, response);
    }

    pub fn on_post(&self, url: &str, response: MockResponse) {
        self.set_response("POST", url, response);
    }

    fn set_response(&self, method: &str, url: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), url.to_string()), response);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests with the given method, in call order.
    pub fn requests_with_method(&self, method: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }

    fn respond(
        &self,
        method: &str,
        url: &str,
        headers: &Headers,
        body: Option<String>,
    ) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });

        let key = (method.to_string(), url.to_string());
        match self.responses.lock().unwrap().get(&key).cloned() {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!(
                "No mock response for {} {}",
                method, url
            ))),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.respond("GET", url, headers, None)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.respond("POST", url, headers, Some(body.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_with_configured_response() {
        let client = MockHttpClient::new();
        client.on_get(
            "http://api/forms/1/",
            MockResponse::json(200, &serde_json::json!({"id": 1})),
        );

        let response = client
            .get("http://api/forms/1/", &Headers::new())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(client.requests().len(), 1);
        assert_eq!(client.requests()[0].method, "GET");
    }

    #[tokio::test]
    async fn test_method_is_part_of_the_key() {
        let client = MockHttpClient::new();
        client.on_post("http://api/x/", MockResponse::status(201));

        let result = client.get("http://api/x/", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_post_body_is_recorded() {
        let client = MockHttpClient::new();
        client.on_post("http://api/form-responses/", MockResponse::status(201));

        client
            .post("http://api/form-responses/", r#"{"form":1}"#, &Headers::new())
            .await
            .unwrap();

        let posts = client.requests_with_method("POST");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].json_body(), Some(serde_json::json!({"form": 1})));
    }

    #[tokio::test]
    async fn test_error_response() {
        let client = MockHttpClient::new();
        client.on_get(
            "http://api/forms/9/",
            MockResponse::Error(HttpError::Timeout("slow".to_string())),
        );

        let result = client.get("http://api/forms/9/", &Headers::new()).await;
        assert_eq!(result.unwrap_err(), HttpError::Timeout("slow".to_string()));
    }

    #[tokio::test]
    async fn test_clones_share_log() {
        let client = MockHttpClient::new();
        client.on_get("http://api/a/", MockResponse::status(200));
        let cloned = client.clone();

        cloned.get("http://api/a/", &Headers::new()).await.unwrap();

        assert_eq!(client.requests().len(), 1);
    }
}
