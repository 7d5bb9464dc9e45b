//! Authentication for the Trendz storefront components.
//!
//! Components never read the browser cookie store directly; they are handed a
//! [`CredentialProvider`] that yields the bearer token for outbound requests.

mod cookie;
mod error;
mod provider;
mod token;

pub use cookie::CookieJar;
pub use error::AuthError;
pub use provider::{CookieCredentials, CredentialProvider, StaticCredentials};
pub use token::BearerToken;
