// File: src/response_mode.rs
// Purpose: Content negotiation for form responses

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use std::convert::Infallible;

/// How a submit response should be shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// Full HTML document (plain browser form post)
    Page,
    /// The form element only, swapped in by htmx
    Fragment,
    /// `{"valid": .., "errors": {..}}`
    Json,
}

impl ResponseMode {
    /// Decide from request headers
    ///
    /// An explicit JSON `Accept` wins over the htmx header.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let accept = headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if accept.contains("application/json") {
            return ResponseMode::Json;
        }

        if headers.contains_key("hx-request") {
            return ResponseMode::Fragment;
        }

        ResponseMode::Page
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ResponseMode
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(ResponseMode::from_headers(&parts.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (key, value) in pairs {
            map.insert(*key, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_plain_browser_post_gets_page() {
        let mode = ResponseMode::from_headers(&headers(&[("accept", "text/html,*/*")]));
        assert_eq!(mode, ResponseMode::Page);
        assert_eq!(ResponseMode::from_headers(&HeaderMap::new()), ResponseMode::Page);
    }

    #[test]
    fn test_htmx_gets_fragment() {
        let mode = ResponseMode::from_headers(&headers(&[("hx-request", "true")]));
        assert_eq!(mode, ResponseMode::Fragment);
    }

    #[test]
    fn test_json_accept_wins() {
        let mode = ResponseMode::from_headers(&headers(&[
            ("accept", "application/json"),
            ("hx-request", "true"),
        ]));
        assert_eq!(mode, ResponseMode::Json);
    }
}
