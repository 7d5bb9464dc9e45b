//! Transport seam between the fetch client and the host HTTP stack.

use async_trait::async_trait;

use crate::{FetchError, Request, Response};

/// Sends a built request and returns the raw response.
///
/// Implementations return `Ok` for every HTTP status; only failures to
/// deliver the request or read the response are errors.
#[async_trait(?Send)]
pub trait HttpTransport {
    /// Send a request.
    async fn send(&self, request: Request) -> Result<Response, FetchError>;
}

/// Transport backed by Spin's outbound HTTP.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl HttpTransport for SpinTransport {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        use spin_sdk::http::{Method as SpinMethod, Request as SpinRequest, Response as SpinResponse};

        let method = match request.method.as_str() {
            "GET" => SpinMethod::Get,
            "HEAD" => SpinMethod::Head,
            "POST" => SpinMethod::Post,
            "PUT" => SpinMethod::Put,
            "PATCH" => SpinMethod::Patch,
            "DELETE" => SpinMethod::Delete,
            "OPTIONS" => SpinMethod::Options,
            other => return Err(FetchError::Transport(format!("unsupported method {}", other))),
        };

        let mut builder = SpinRequest::builder();
        builder.method(method);
        builder.uri(&request.url);
        for (key, value) in &request.headers {
            builder.header(key.as_str(), value.as_str());
        }

        let response: SpinResponse = spin_sdk::http::send(builder.build())
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = *response.status();
        let headers = response
            .headers()
            .map(|(k, v)| (k.to_string(), v.as_str().unwrap_or("").to_string()))
            .collect();

        Ok(Response::new(status, headers, response.body().to_vec()))
    }
}
