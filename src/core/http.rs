//! HTTP utilities for FPL API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

/// Default request timeout for every API call.
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Maximum number of response-body bytes kept for error diagnostics.
pub const ERROR_BODY_LIMIT: usize = 1024;

/// Headers sent with every request: JSON `Accept` and a crate `User-Agent`.
pub fn default_header_map() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    h.insert(USER_AGENT, HeaderValue::from_str(&agent)?);
    Ok(h)
}

/// Truncate a response body to [`ERROR_BODY_LIMIT`] bytes without splitting a character.
pub fn truncate_body(body: &str) -> &str {
    if body.len() <= ERROR_BODY_LIMIT {
        return body;
    }
    let mut end = ERROR_BODY_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_header_map() {
        let headers = default_header_map().unwrap();
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert!(headers
            .get(USER_AGENT)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("fpl-cli/"));
    }

    #[test]
    fn test_truncate_body_short_is_untouched() {
        assert_eq!(truncate_body("Not Found"), "Not Found");
    }

    #[test]
    fn test_truncate_body_limits_length() {
        let body = "x".repeat(ERROR_BODY_LIMIT + 50);
        assert_eq!(truncate_body(&body).len(), ERROR_BODY_LIMIT);
    }

    #[test]
    fn test_truncate_body_respects_char_boundaries() {
        let mut body = "a".repeat(ERROR_BODY_LIMIT - 1);
        body.push('é');
        let truncated = truncate_body(&body);
        assert_eq!(truncated.len(), ERROR_BODY_LIMIT - 1);
    }
}
