//! Bearer tokens.

use std::fmt;

use crate::AuthError;

/// A bearer credential for the `Authorization` header.
///
/// `Debug` never prints the token value.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Create a token, rejecting empty values and values that cannot be sent
    /// in a header.
    pub fn new(token: impl Into<String>) -> Result<Self, AuthError> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(AuthError::InvalidToken("empty token".to_string()));
        }
        if trimmed.chars().any(|c| c.is_control() || c.is_whitespace()) {
            return Err(AuthError::InvalidToken(
                "token contains whitespace or control characters".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The raw token value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BearerToken(***)")
    }
}

impl AsRef<str> for BearerToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
