//! HTTP client utilities for the Trendz storefront components.
//!
//! The client builds requests and hands them to an [`HttpTransport`]. Spin's
//! outbound HTTP backs it in the deployed component; [`ReplayTransport`] backs
//! it in tests and local runs.
//!
//! # Example
//!
//! ```rust,ignore
//! use trendz_data::{FetchClient, ReplayTransport};
//!
//! let client = FetchClient::new(ReplayTransport::new());
//!
//! let response = client
//!     .get("https://apis.ccbp.in/products/16")
//!     .bearer_auth(token)
//!     .send()
//!     .await?;
//! ```

mod error;
mod replay;
mod request;
mod response;
mod transport;

use std::rc::Rc;

use http::Method;

pub use error::FetchError;
pub use replay::{RecordedResponse, ReplayTransport};
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use transport::HttpTransport;
#[cfg(target_arch = "wasm32")]
pub use transport::SpinTransport;

/// HTTP client for making outbound requests.
#[derive(Clone)]
pub struct FetchClient {
    transport: Rc<dyn HttpTransport>,
}

impl FetchClient {
    /// Create a new HTTP client over a transport.
    pub fn new(transport: impl HttpTransport + 'static) -> Self {
        Self::from_shared(Rc::new(transport))
    }

    /// Create a client over a transport the caller keeps a handle to.
    pub fn from_shared(transport: Rc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Create a GET request for an absolute URL.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        ClientRequestBuilder {
            builder: RequestBuilder::new(Method::GET, url),
            transport: Rc::clone(&self.transport),
        }
    }
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient").finish_non_exhaustive()
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
    transport: Rc<dyn HttpTransport>,
}

impl ClientRequestBuilder {
    /// Add a bearer token authorization header.
    pub fn bearer_auth(mut self, token: impl AsRef<str>) -> Self {
        self.builder = self.builder.bearer_auth(token);
        self
    }

    /// Set the Accept header.
    pub fn accept(mut self, content_type: impl Into<String>) -> Self {
        self.builder = self.builder.accept(content_type);
        self
    }

    /// Send the request and return the response, whatever its status.
    pub async fn send(self) -> Result<Response, FetchError> {
        let request = self.builder.build()?;
        self.transport.send(request).await
    }
}
