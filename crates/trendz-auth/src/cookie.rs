//! Cookie header parsing.

use std::collections::HashMap;

use percent_encoding::percent_decode_str;

/// Cookies sent with a request, parsed from a `Cookie` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    cookies: HashMap<String, String>,
}

impl CookieJar {
    /// Create an empty jar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `Cookie` header (`name=value; other=value`).
    ///
    /// Malformed pairs are skipped. When a name repeats, the first value wins,
    /// matching how browsers order the more specific cookie first.
    pub fn parse(header: &str) -> Self {
        let mut cookies = HashMap::new();
        for pair in header.split(';') {
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            cookies
                .entry(name.to_string())
                .or_insert_with(|| percent_decode(value));
        }
        Self { cookies }
    }

    /// Add a cookie.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    /// Get a cookie value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(|s| s.as_str())
    }

    /// Number of cookies in the jar.
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// Whether the jar holds no cookies.
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

/// Decode `%XX` escapes. Invalid escapes are kept verbatim; a value that
/// does not decode to UTF-8 is kept as sent.
fn percent_decode(value: &str) -> String {
    percent_decode_str(value)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multiple_cookies() {
        let jar = CookieJar::parse("theme=dark; jwt_token=abc.def; lang=en");
        assert_eq!(jar.len(), 3);
        assert_eq!(jar.get("jwt_token"), Some("abc.def"));
        assert_eq!(jar.get("theme"), Some("dark"));
    }

    #[test]
    fn test_parse_quoted_and_encoded() {
        let jar = CookieJar::parse(r#"a="quoted"; b=hello%20world; c=100%"#);
        assert_eq!(jar.get("a"), Some("quoted"));
        assert_eq!(jar.get("b"), Some("hello world"));
        assert_eq!(jar.get("c"), Some("100%"));
    }

    #[test]
    fn test_invalid_escapes_kept_verbatim() {
        let jar = CookieJar::parse("t=a%+1b; u=%-f; v=end%4; w=%zz");
        assert_eq!(jar.get("t"), Some("a%+1b"));
        assert_eq!(jar.get("u"), Some("%-f"));
        assert_eq!(jar.get("v"), Some("end%4"));
        assert_eq!(jar.get("w"), Some("%zz"));
    }

    #[test]
    fn test_non_utf8_escape_kept_as_sent() {
        let jar = CookieJar::parse("t=%ff%fe");
        assert_eq!(jar.get("t"), Some("%ff%fe"));
    }

    #[test]
    fn test_parse_skips_malformed() {
        let jar = CookieJar::parse("novalue; =orphan; ok=1;;");
        assert_eq!(jar.len(), 1);
        assert_eq!(jar.get("ok"), Some("1"));
    }

    #[test]
    fn test_first_duplicate_wins() {
        let jar = CookieJar::parse("jwt_token=first; jwt_token=second");
        assert_eq!(jar.get("jwt_token"), Some("first"));
    }

    #[test]
    fn test_empty_header() {
        assert!(CookieJar::parse("").is_empty());
    }
}
