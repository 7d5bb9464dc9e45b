//! Product details fetch and transform.

use thiserror::Error;
use trendz_auth::{AuthError, CredentialProvider};
use trendz_catalog::{ProductDetails, ProjectionError};
use trendz_data::{FetchClient, FetchError, Response};

use crate::state::{ApiStatus, ErrorKind};

/// Errors loading a product's details.
#[derive(Error, Debug)]
pub enum LoadError {
    /// No usable credential; no request was sent.
    #[error("credential unavailable: {0}")]
    Credentials(#[from] AuthError),

    /// The API has no such product.
    #[error("product not found")]
    NotFound,

    /// The API rejected the credential.
    #[error("credential rejected with status {status}")]
    Rejected { status: u16 },

    /// The API answered with an unexpected status.
    #[error("unexpected status {status}")]
    Upstream { status: u16 },

    /// The request failed before a response arrived.
    #[error(transparent)]
    Transport(#[from] FetchError),

    /// The body was not a valid product record.
    #[error(transparent)]
    Decode(#[from] ProjectionError),
}

impl LoadError {
    /// The view status this error settles into.
    pub fn status(&self) -> ApiStatus {
        match self {
            LoadError::NotFound => ApiStatus::Failure,
            LoadError::Credentials(_) | LoadError::Rejected { .. } => {
                ApiStatus::Error(ErrorKind::Unauthorized)
            }
            LoadError::Upstream { status } => ApiStatus::Error(ErrorKind::Upstream { status: *status }),
            LoadError::Transport(FetchError::Parse(msg)) => {
                ApiStatus::Error(ErrorKind::Decode(msg.clone()))
            }
            LoadError::Transport(e) => ApiStatus::Error(ErrorKind::Transport(e.to_string())),
            LoadError::Decode(e) => ApiStatus::Error(ErrorKind::Decode(e.to_string())),
        }
    }
}

/// The view status a finished load settles into.
pub fn settle(result: Result<ProductDetails, LoadError>) -> ApiStatus {
    match result {
        Ok(details) => ApiStatus::Success(details),
        Err(e) => e.status(),
    }
}

/// Send the authorized GET for `url`. Any status is returned as a response.
pub async fn request_product(
    client: &FetchClient,
    credentials: &dyn CredentialProvider,
    url: &str,
) -> Result<Response, LoadError> {
    let token = credentials.bearer_token()?;

    Ok(client
        .get(url)
        .bearer_auth(token.expose())
        .accept("application/json")
        .send()
        .await?)
}

/// Classify a response and project its body.
pub fn details_from_response(response: &Response) -> Result<ProductDetails, LoadError> {
    if response.is_not_found() {
        return Err(LoadError::NotFound);
    }
    if response.is_unauthorized() {
        return Err(LoadError::Rejected {
            status: response.status,
        });
    }
    if !response.is_success() {
        return Err(LoadError::Upstream {
            status: response.status,
        });
    }

    let record: serde_json::Value = response.json()?;
    Ok(ProductDetails::from_record(&record)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::rc::Rc;

    use futures::executor::block_on;
    use serde_json::json;
    use trendz_auth::{BearerToken, StaticCredentials};
    use trendz_data::ReplayTransport;

    const URL: &str = "https://apis.test/products/16";

    fn body() -> serde_json::Value {
        json!({
            "id": 16,
            "title": "Wide Bowknot Hat",
            "description": "A hat",
            "brand": "MAJIK",
            "price": 288,
            "rating": 3.6,
            "availability": "In Stock",
            "totalReviews": 8,
            "imageUrl": "https://assets.test/hat.png",
            "style": "Casual",
            "similar_products": [{
                "id": 1,
                "title": "Cap",
                "description": "A cap",
                "brand": "Puma",
                "price": 100,
                "rating": 4,
                "availability": "Out of Stock",
                "totalReviews": 2,
                "imageUrl": "https://assets.test/cap.png",
                "style": "Sport"
            }]
        })
    }

    fn creds() -> StaticCredentials {
        StaticCredentials::new(BearerToken::new("tok").unwrap())
    }

    fn load(
        client: &FetchClient,
        credentials: &dyn CredentialProvider,
        url: &str,
    ) -> Result<ProductDetails, LoadError> {
        block_on(request_product(client, credentials, url))
            .and_then(|response| details_from_response(&response))
    }

    fn raw(status: u16, body: &[u8]) -> Response {
        Response::new(status, HashMap::new(), body.to_vec())
    }

    // === Loading Tests ===

    #[test]
    fn test_load_success_sends_bearer() {
        let transport = Rc::new(ReplayTransport::new().with_json(URL, 200, body()));
        let client = FetchClient::from_shared(transport.clone());

        let details = load(&client, &creds(), URL).unwrap();
        assert_eq!(details.product.title, "Wide Bowknot Hat");
        assert_eq!(details.similar_products.len(), 1);
        assert_eq!(details.similar_products[0].brand, "Puma");

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].header("Authorization"), Some("Bearer tok"));
    }

    #[test]
    fn test_load_without_credentials_sends_nothing() {
        let transport = Rc::new(ReplayTransport::new().with_json(URL, 200, body()));
        let client = FetchClient::from_shared(transport.clone());

        let err = load(&client, &StaticCredentials::anonymous(), URL).unwrap_err();
        assert!(matches!(err, LoadError::Credentials(_)));
        assert!(transport.sent().is_empty());
    }

    #[test]
    fn test_request_returns_error_statuses() {
        let transport = ReplayTransport::new().with_json(URL, 503, json!({"error_msg": "down"}));
        let client = FetchClient::new(transport);

        let response = block_on(request_product(&client, &creds(), URL)).unwrap();
        assert_eq!(response.status, 503);
    }

    #[test]
    fn test_load_transport_failure() {
        let transport =
            ReplayTransport::new().with_failure(URL, FetchError::Transport("dns".into()));
        let client = FetchClient::new(transport);

        let err = load(&client, &creds(), URL).unwrap_err();
        assert_eq!(
            err.status(),
            ApiStatus::Error(ErrorKind::Transport("Request failed: dns".to_string()))
        );
    }

    // === Classification Tests ===

    #[test]
    fn test_not_found_settles_to_failure() {
        let err = details_from_response(&raw(404, b"")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound));
        assert_eq!(err.status(), ApiStatus::Failure);
    }

    #[test]
    fn test_rejected_settles_to_unauthorized() {
        for status in [401, 403] {
            let err = details_from_response(&raw(status, b"")).unwrap_err();
            assert_eq!(err.status(), ApiStatus::Error(ErrorKind::Unauthorized));
        }
    }

    #[test]
    fn test_other_status_settles_to_upstream() {
        let err = details_from_response(&raw(500, b"oops")).unwrap_err();
        assert_eq!(
            err.status(),
            ApiStatus::Error(ErrorKind::Upstream { status: 500 })
        );
    }

    #[test]
    fn test_malformed_json_settles_to_decode() {
        let err = details_from_response(&raw(200, b"{not json")).unwrap_err();
        assert!(matches!(err.status(), ApiStatus::Error(ErrorKind::Decode(_))));
    }

    #[test]
    fn test_invalid_record_settles_to_decode() {
        let err = details_from_response(&raw(200, br#"{"id": 1}"#)).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
        assert!(matches!(err.status(), ApiStatus::Error(ErrorKind::Decode(_))));
    }

    #[test]
    fn test_settle_success() {
        let response = Response::json_body(200, &body());
        let status = settle(details_from_response(&response));
        assert_eq!(status.name(), "SUCCESS");
    }
}
