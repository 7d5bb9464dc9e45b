//! Replay transport for local runs and tests.
//!
//! Serves recorded responses by URL instead of touching the network, and keeps
//! every request it was asked to send so callers can inspect headers.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{FetchError, HttpTransport, Request, Response};

/// A recorded dependency response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedResponse {
    /// URL the response answers.
    pub url: String,
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Response body as JSON.
    #[serde(default)]
    pub body: serde_json::Value,
}

#[derive(Debug, Clone)]
enum Outcome {
    Respond(Response),
    Fail(FetchError),
}

/// A transport that answers from recorded responses.
#[derive(Debug, Default)]
pub struct ReplayTransport {
    outcomes: HashMap<String, Outcome>,
    sent: RefCell<Vec<Request>>,
}

impl ReplayTransport {
    /// Create an empty replay transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load recorded responses from a JSON array of [`RecordedResponse`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let recordings: Vec<RecordedResponse> = serde_json::from_str(json)?;
        Ok(recordings
            .into_iter()
            .fold(Self::new(), |transport, r| transport.with_recording(r)))
    }

    /// Add a recorded response.
    pub fn with_recording(mut self, recording: RecordedResponse) -> Self {
        let body = if recording.body.is_null() {
            Vec::new()
        } else {
            recording.body.to_string().into_bytes()
        };
        let response = Response::new(recording.status_code, recording.headers, body);
        self.outcomes.insert(recording.url, Outcome::Respond(response));
        self
    }

    /// Answer `url` with a JSON body.
    pub fn with_json(self, url: impl Into<String>, status: u16, body: serde_json::Value) -> Self {
        self.with_response(url, Response::json_body(status, &body))
    }

    /// Answer `url` with a prepared response.
    pub fn with_response(mut self, url: impl Into<String>, response: Response) -> Self {
        self.outcomes.insert(url.into(), Outcome::Respond(response));
        self
    }

    /// Fail requests to `url` at the transport level.
    pub fn with_failure(mut self, url: impl Into<String>, error: FetchError) -> Self {
        self.outcomes.insert(url.into(), Outcome::Fail(error));
        self
    }

    /// Requests sent so far, in order.
    pub fn sent(&self) -> Vec<Request> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReplayTransport {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        let outcome = self.outcomes.get(&request.url).cloned();
        let url = request.url.clone();
        self.sent.borrow_mut().push(request);

        match outcome {
            Some(Outcome::Respond(response)) => Ok(response),
            Some(Outcome::Fail(error)) => Err(error),
            None => Err(FetchError::Transport(format!(
                "no recorded response for {}",
                url
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RequestBuilder;
    use futures::executor::block_on;
    use http::Method;

    fn get(url: &str) -> Request {
        RequestBuilder::new(Method::GET, url).build().unwrap()
    }

    #[test]
    fn test_replays_recorded_json() {
        let transport = ReplayTransport::new().with_json(
            "https://api.test/products/1",
            200,
            serde_json::json!({"id": 1}),
        );
        let resp = block_on(transport.send(get("https://api.test/products/1"))).unwrap();
        assert_eq!(resp.status, 200);
        let body: serde_json::Value = resp.json().unwrap();
        assert_eq!(body["id"], 1);
    }

    #[test]
    fn test_unknown_url_is_transport_error() {
        let transport = ReplayTransport::new();
        let err = block_on(transport.send(get("https://api.test/x"))).unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[test]
    fn test_records_sent_requests() {
        let transport = ReplayTransport::new()
            .with_failure("https://api.test/a", FetchError::Transport("reset".into()));
        let _ = block_on(transport.send(get("https://api.test/a")));
        let _ = block_on(transport.send(get("https://api.test/b")));
        let sent = transport.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].url, "https://api.test/a");
        assert_eq!(sent[1].url, "https://api.test/b");
    }

    #[test]
    fn test_from_json_recordings() {
        let transport = ReplayTransport::from_json(
            r#"[
                {"url": "https://api.test/products/9", "status_code": 404},
                {"url": "https://api.test/products/1", "status_code": 200, "body": {"title": "Shoes"}}
            ]"#,
        )
        .unwrap();

        let missing = block_on(transport.send(get("https://api.test/products/9"))).unwrap();
        assert!(missing.is_not_found());
        assert!(missing.body.is_empty());

        let found = block_on(transport.send(get("https://api.test/products/1"))).unwrap();
        let body: serde_json::Value = found.json().unwrap();
        assert_eq!(body["title"], "Shoes");
    }
}
