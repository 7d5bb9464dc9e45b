//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No credential is available for the request.
    #[error("no credential found in cookie {0}")]
    MissingToken(String),

    /// A credential was found but is unusable.
    #[error("token invalid: {0}")]
    InvalidToken(String),
}
