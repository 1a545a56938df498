use crate::pager::PageCursor;
use pe_errors::{ClientError, normalize};
use pe_http::{HttpRequest, Method, RawResponse, Transport};
use pe_query::{DecodeMode, OrderBy, Pagination, Query, build_query_request};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

/// Client for one PE service.
///
/// Cheap to clone; clones share the transport. Every failure is returned as
/// a normalized [`ClientError`].
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    decode_mode: DecodeMode,
}

impl ApiClient {
    /// Create a client over `transport` with lenient decoding
    #[must_use]
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self::from_arc(Arc::new(transport))
    }

    #[must_use]
    pub fn from_arc(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            decode_mode: DecodeMode::Lenient,
        }
    }

    #[must_use]
    pub fn with_decode_mode(mut self, decode_mode: DecodeMode) -> Self {
        self.decode_mode = decode_mode;
        self
    }

    #[must_use]
    pub fn decode_mode(&self) -> DecodeMode {
        self.decode_mode
    }

    /// Send a request and return the response whatever its status.
    ///
    /// # Errors
    /// Returns [`ClientError::Transport`] if no response was received.
    pub fn send_raw(&self, request: &HttpRequest) -> Result<RawResponse, ClientError> {
        self.transport
            .execute(request)
            .map_err(|err| normalize(Err(&err), None))
    }

    /// Send a request and return the response if its status is 2xx.
    ///
    /// # Errors
    /// Returns [`ClientError::Transport`] if no response was received, or the
    /// normalized error ([`ClientError::Api`] / [`ClientError::HttpStatus`]) for
    /// any other status.
    pub fn execute(&self, request: &HttpRequest) -> Result<RawResponse, ClientError> {
        let response = self.send_raw(request)?;
        if response.is_success() {
            return Ok(response);
        }

        let fallback = format!("{} error", request.path());
        Err(normalize(Ok(&response), Some(&fallback)))
    }

    /// Decode a response body according to the client's decode mode.
    ///
    /// # Errors
    /// Returns [`ClientError::Schema`] if the body does not match `R`.
    pub fn decode<R: DeserializeOwned>(&self, response: &RawResponse) -> Result<R, ClientError> {
        Ok(pe_query::decode(response.body(), self.decode_mode)?)
    }

    /// [`execute`](Self::execute) followed by [`decode`](Self::decode).
    ///
    /// # Errors
    /// See [`execute`](Self::execute) and [`decode`](Self::decode).
    pub fn execute_json<R: DeserializeOwned>(&self, request: &HttpRequest) -> Result<R, ClientError> {
        let response = self.execute(request)?;
        self.decode(&response)
    }

    /// GET `path` and decode the body.
    ///
    /// # Errors
    /// See [`execute_json`](Self::execute_json).
    pub fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ClientError> {
        self.execute_json(&HttpRequest::get(path))
    }

    /// DELETE `path`, discarding any response body.
    ///
    /// # Errors
    /// See [`execute`](Self::execute).
    pub fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.execute(&HttpRequest::delete(path)).map(|_| ())
    }

    /// Send `body` as JSON and decode the response.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidRequest`] if `body` cannot be encoded
    /// (nothing is sent), otherwise see [`execute_json`](Self::execute_json).
    pub fn execute_command<B, R>(&self, method: Method, path: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = HttpRequest::new(method, path)
            .json(body)
            .map_err(|e| ClientError::invalid_request(format!("cannot encode {path} body: {e}")))?;
        self.execute_json(&request)
    }

    /// Run one query against a paginated endpoint and decode the result.
    ///
    /// # Errors
    /// See [`execute_json`](Self::execute_json).
    pub fn query<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
        pagination: Option<&Pagination>,
        order_by: &OrderBy,
    ) -> Result<R, ClientError> {
        self.execute_json(&build_query_request(path, query, pagination, order_by))
    }

    /// Cursor over every record of a paginated query endpoint
    pub fn cursor<T: DeserializeOwned>(
        &self,
        path: impl Into<String>,
        query: Query,
        pagination: Pagination,
        order_by: OrderBy,
    ) -> PageCursor<T> {
        PageCursor::new(self.clone(), path, query, pagination, order_by)
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("decode_mode", &self.decode_mode)
            .finish_non_exhaustive()
    }
}
