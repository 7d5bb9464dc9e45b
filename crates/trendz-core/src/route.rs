//! Route patterns and matched route parameters.

use std::collections::HashMap;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Storefront home route.
pub const HOME_ROUTE: &str = "/";
/// Product listing route.
pub const PRODUCTS_ROUTE: &str = "/products";
/// Product details route pattern.
pub const PRODUCT_DETAILS_ROUTE: &str = "/products/:id";
/// Cart route.
pub const CART_ROUTE: &str = "/cart";
/// Login route.
pub const LOGIN_ROUTE: &str = "/login";

/// Bytes escaped when an id is placed in a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Extracted route parameters (e.g., `:id` from `/products/:id`).
pub type RouteParams = HashMap<String, String>;

/// One segment of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A parsed route pattern such as `/products/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    pattern: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern. Segments starting with `:` capture a parameter.
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let segments = split_path(&pattern)
            .map(|seg| match seg.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Static(seg.to_string()),
            })
            .collect();
        Self { pattern, segments }
    }

    /// The pattern text this was parsed from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Match a request path (query string ignored).
    ///
    /// Parameter segments never match an empty value. Captured values are
    /// percent-decoded.
    pub fn matches(&self, path: &str) -> Option<RouteMatch> {
        let path_only = path.split('?').next().unwrap_or_default();
        let parts: Vec<&str> = split_path(path_only).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(expected) if expected == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => {
                    let value = percent_decode_str(part)
                        .decode_utf8()
                        .map(|decoded| decoded.into_owned())
                        .unwrap_or_else(|_| part.to_string());
                    params.insert(name.clone(), value);
                }
            }
        }

        Some(RouteMatch {
            path: path_only.to_string(),
            params,
        })
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// The result of matching a path against a route pattern.
///
/// This is the routing context a component receives on mount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMatch {
    /// The matched path, without query string.
    pub path: String,
    /// Captured parameters.
    pub params: RouteParams,
}

impl RouteMatch {
    /// Create a match directly from parameters.
    pub fn new(path: impl Into<String>, params: RouteParams) -> Self {
        Self {
            path: path.into(),
            params,
        }
    }

    /// Get a route parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(|s| s.as_str())
    }
}

/// Escape `segment` for use as one path segment.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Path of the details page for a product id.
pub fn product_details_path(id: &str) -> String {
    format!("{}/{}", PRODUCTS_ROUTE, encode_path_segment(id))
}
