//! Bearer Token Header Handling
//!
//! Extraction of `Authorization: Bearer <token>` credentials from request
//! headers. The scheme name is matched case-insensitively per RFC 6750.

use axum::http::{HeaderMap, header};

/// Extract a bearer token from the Authorization header
///
/// Returns `None` when the header is absent, not valid UTF-8, uses a
/// different scheme, or carries an empty token.
pub fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_bearer() {
        let headers = headers_with("Bearer abc.def");
        assert_eq!(extract_bearer(&headers), Some("abc.def".to_string()));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let headers = headers_with("bearer tok123");
        assert_eq!(extract_bearer(&headers), Some("tok123".to_string()));
    }

    #[test]
    fn test_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(extract_bearer(&headers), None);
    }

    #[test]
    fn test_wrong_scheme() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer(&headers), None);
    }

    #[test]
    fn test_empty_token() {
        let headers = headers_with("Bearer ");
        assert_eq!(extract_bearer(&headers), None);

        let headers = headers_with("Bearer");
        assert_eq!(extract_bearer(&headers), None);
    }
}
