//! Request path type for the browser boundary.
//!
//! - Internal representation: always decoded (human-readable)
//! - Browser boundary: decode on input, query string and fragment stripped
//!
//! Decoding is the only normalization performed. Trailing slashes and case
//! are preserved so route matching stays strict: `/image-resizer/` is a
//! different path than `/image-resizer`.

use std::fmt;

/// Decoded request path with a guaranteed leading `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestPath(String);

impl RequestPath {
    /// Create from a browser URL: strip query string and fragment, decode
    /// percent-encoding, ensure a leading slash.
    pub fn from_browser(encoded: &str) -> Self {
        use percent_encoding::percent_decode_str;

        let path = encoded.split(['?', '#']).next().unwrap_or(encoded);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());
        let trimmed = decoded.trim();

        if trimmed.is_empty() {
            return Self("/".to_string());
        }
        if trimmed.starts_with('/') {
            Self(trimmed.to_string())
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    /// Get the decoded path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the site root.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }
}

impl fmt::Display for RequestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RequestPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_browser_plain() {
        assert_eq!(RequestPath::from_browser("/image-resizer").as_str(), "/image-resizer");
    }

    #[test]
    fn test_from_browser_strips_query() {
        assert_eq!(RequestPath::from_browser("/gif-maker?ref=home").as_str(), "/gif-maker");
    }

    #[test]
    fn test_from_browser_strips_fragment() {
        assert_eq!(RequestPath::from_browser("/terms#section-3").as_str(), "/terms");
    }

    #[test]
    fn test_from_browser_decodes() {
        assert_eq!(
            RequestPath::from_browser("/hello%20world").as_str(),
            "/hello world"
        );
    }

    #[test]
    fn test_from_browser_invalid_utf8_preserved() {
        assert_eq!(RequestPath::from_browser("/%FF").as_str(), "/%FF");
    }

    #[test]
    fn test_from_browser_empty() {
        assert_eq!(RequestPath::from_browser("").as_str(), "/");
        assert_eq!(RequestPath::from_browser("/").as_str(), "/");
    }

    #[test]
    fn test_from_browser_adds_leading_slash() {
        assert_eq!(RequestPath::from_browser("terms").as_str(), "/terms");
    }

    #[test]
    fn test_trailing_slash_preserved() {
        // No trailing-slash normalization: route matching is strict.
        assert_eq!(
            RequestPath::from_browser("/image-resizer/").as_str(),
            "/image-resizer/"
        );
    }

    #[test]
    fn test_case_preserved() {
        assert_eq!(RequestPath::from_browser("/Terms").as_str(), "/Terms");
    }

    #[test]
    fn test_is_root() {
        assert!(RequestPath::from_browser("/").is_root());
        assert!(!RequestPath::from_browser("/terms").is_root());
    }
}
