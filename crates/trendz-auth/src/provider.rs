//! Credential providers.

use trendz_core::DEFAULT_TOKEN_COOKIE;

use crate::{AuthError, BearerToken, CookieJar};

/// Supplies the bearer token for outbound API requests.
pub trait CredentialProvider {
    /// The current bearer token.
    fn bearer_token(&self) -> Result<BearerToken, AuthError>;
}

/// Reads the bearer token from a named cookie.
#[derive(Debug, Clone)]
pub struct CookieCredentials {
    jar: CookieJar,
    cookie_name: String,
}

impl CookieCredentials {
    /// Read the token from the default `jwt_token` cookie.
    pub fn new(jar: CookieJar) -> Self {
        Self::with_cookie_name(jar, DEFAULT_TOKEN_COOKIE)
    }

    /// Read the token from a custom cookie.
    pub fn with_cookie_name(jar: CookieJar, cookie_name: impl Into<String>) -> Self {
        Self {
            jar,
            cookie_name: cookie_name.into(),
        }
    }

    /// Name of the cookie the token is read from.
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }
}

impl CredentialProvider for CookieCredentials {
    fn bearer_token(&self) -> Result<BearerToken, AuthError> {
        let value = self
            .jar
            .get(&self.cookie_name)
            .ok_or_else(|| AuthError::MissingToken(self.cookie_name.clone()))?;
        BearerToken::new(value)
    }
}

/// A fixed token.
#[derive(Debug, Clone)]
pub struct StaticCredentials(Option<BearerToken>);

impl StaticCredentials {
    /// Always yield `token`.
    pub fn new(token: BearerToken) -> Self {
        Self(Some(token))
    }

    /// Never yield a token.
    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticCredentials {
    fn bearer_token(&self) -> Result<BearerToken, AuthError> {
        self.0
            .clone()
            .ok_or_else(|| AuthError::MissingToken("<static>".to_string()))
    }
}

impl<P: CredentialProvider + ?Sized> CredentialProvider for &P {
    fn bearer_token(&self) -> Result<BearerToken, AuthError> {
        (**self).bearer_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_credentials_default_cookie() {
        let creds = CookieCredentials::new(CookieJar::parse("jwt_token=abc"));
        assert_eq!(creds.cookie_name(), "jwt_token");
        assert_eq!(creds.bearer_token().unwrap().expose(), "abc");
    }

    #[test]
    fn test_cookie_credentials_custom_cookie() {
        let jar = CookieJar::new().with("session_token", "xyz");
        let creds = CookieCredentials::with_cookie_name(jar, "session_token");
        assert_eq!(creds.bearer_token().unwrap().expose(), "xyz");
    }

    #[test]
    fn test_cookie_credentials_missing() {
        let creds = CookieCredentials::new(CookieJar::parse("theme=dark"));
        assert_eq!(
            creds.bearer_token().unwrap_err(),
            AuthError::MissingToken("jwt_token".to_string())
        );
    }

    #[test]
    fn test_cookie_credentials_empty_value() {
        let creds = CookieCredentials::new(CookieJar::parse("jwt_token="));
        assert!(matches!(
            creds.bearer_token(),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_static_credentials() {
        let token = BearerToken::new("t").unwrap();
        assert_eq!(StaticCredentials::new(token.clone()).bearer_token().unwrap(), token);
        assert!(matches!(
            StaticCredentials::anonymous().bearer_token(),
            Err(AuthError::MissingToken(_))
        ));
    }

    #[test]
    fn test_provider_by_reference() {
        fn token_of(provider: impl CredentialProvider) -> String {
            provider.bearer_token().unwrap().expose().to_string()
        }
        let creds = CookieCredentials::new(CookieJar::parse("jwt_token=ref"));
        assert_eq!(token_of(&creds), "ref");
    }
}
