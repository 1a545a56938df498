use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use std::borrow::Cow;

/// A fully-read HTTP response.
///
/// Returned by [`Transport::execute`](crate::Transport::execute) for every
/// status code, including 4xx and 5xx. Callers decide what counts as an error.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: StatusCode,
    status_text: String,
    headers: HeaderMap,
    body: Bytes,
}

impl RawResponse {
    /// Create a response with the canonical reason phrase as status text
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            status_text: status.canonical_reason().unwrap_or_default().to_owned(),
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Override the status text (the reason phrase sent by the server)
    #[must_use]
    pub fn with_status_text(mut self, status_text: impl Into<String>) -> Self {
        self.status_text = status_text.into();
        self
    }

    /// Add a response header; invalid names or values are ignored
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name),
            HeaderValue::try_from(value),
        ) {
            self.headers.append(name, value);
        }
        self
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Reason phrase as received, e.g. `Bad Request`
    #[must_use]
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// First value of header `name`, if present and valid UTF-8
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// `true` for 2xx statuses
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body decoded as UTF-8, replacing invalid sequences
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    #[must_use]
    pub fn into_body(self) -> Bytes {
        self.body
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_canonical_reason() {
        let response = RawResponse::new(StatusCode::BAD_REQUEST, "oops");
        assert_eq!(response.status_text(), "Bad Request");
        assert!(!response.is_success());
        assert_eq!(response.text(), "oops");
    }

    #[test]
    fn test_headers_are_case_insensitive() {
        let response = RawResponse::new(StatusCode::SEE_OTHER, Bytes::new())
            .with_header("Location", "/rbac-api/v1/roles/7");
        assert_eq!(response.header("location"), Some("/rbac-api/v1/roles/7"));
        assert_eq!(response.header("content-type"), None);
    }

    #[test]
    fn test_invalid_header_is_ignored() {
        let response = RawResponse::new(StatusCode::OK, Bytes::new()).with_header("bad name", "v");
        assert!(response.headers().is_empty());
    }
}
