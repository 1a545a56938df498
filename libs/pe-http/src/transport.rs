use crate::error::TransportError;
use crate::request::HttpRequest;
use crate::response::RawResponse;
use std::sync::Arc;

/// One blocking HTTP request/response exchange.
///
/// Implementations return `Err` only when no response was obtained at all
/// (DNS, connect, TLS, timeout, broken body). Every received response,
/// whatever its status, is returned as `Ok`.
///
/// Implementations perform no retries; a failed call may be re-issued by the
/// caller with the same [`HttpRequest`].
pub trait Transport: Send + Sync {
    /// Execute the request and read the full response body.
    ///
    /// # Errors
    /// Returns [`TransportError`] on connection-level failures.
    fn execute(&self, request: &HttpRequest) -> Result<RawResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<RawResponse, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<RawResponse, TransportError> {
        (**self).execute(request)
    }
}
