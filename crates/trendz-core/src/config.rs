//! Component configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::route::{encode_path_segment, LOGIN_ROUTE, PRODUCTS_ROUTE};

/// Default products API host.
pub const DEFAULT_API_BASE_URL: &str = "https://apis.ccbp.in";

/// Default name of the cookie holding the bearer token.
pub const DEFAULT_TOKEN_COOKIE: &str = "jwt_token";

/// Configuration for the storefront components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComponentConfig {
    /// Base URL of the products API (no trailing path).
    pub api_base_url: String,
    /// Cookie that carries the bearer token.
    pub token_cookie: String,
    /// Route the "continue shopping" link navigates to.
    pub listing_route: String,
    /// Route an unauthenticated visitor is sent to.
    pub login_route: String,
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    pub log_level: String,
    /// Log output format (`json`, `human`, `tracing`).
    pub log_format: String,
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_cookie: DEFAULT_TOKEN_COOKIE.to_string(),
            listing_route: PRODUCTS_ROUTE.to_string(),
            login_route: LOGIN_ROUTE.to_string(),
            log_level: "info".to_string(),
            log_format: "json".to_string(),
        }
    }
}

impl ComponentConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            Self::from_json_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validated()
    }

    /// Parse config from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validated()
    }

    /// Set the API base URL.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the token cookie name.
    pub fn with_token_cookie(mut self, name: impl Into<String>) -> Self {
        self.token_cookie = name.into();
        self
    }

    /// URL of the product details endpoint for an id. The id always stays a
    /// single path segment.
    pub fn product_url(&self, id: &str) -> String {
        format!(
            "{}/products/{}",
            self.api_base_url.trim_end_matches('/'),
            encode_path_segment(id)
        )
    }

    fn validated(self) -> Result<Self> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            anyhow::bail!("api_base_url must be an http(s) URL, got {:?}", self.api_base_url);
        }
        if self.token_cookie.is_empty() {
            anyhow::bail!("token_cookie must not be empty");
        }
        Ok(self)
    }
}
