//! Classification of raw HTTP outcomes into [`ClientError`].

use crate::body::ErrorBody;
use crate::error::ClientError;
use pe_http::{RawResponse, TransportError};

/// Turn the outcome of a failed exchange into one [`ClientError`].
///
/// - `Err(transport)` yields [`ClientError::Transport`]; there is no response to inspect.
/// - `Ok(response)` is classified by its body, see [`normalize_response`].
///
/// Callers only invoke this on error paths; a 2xx response is classified the
/// same way as any other and will usually come out as `HttpStatus`.
#[must_use]
pub fn normalize(
    outcome: Result<&RawResponse, &TransportError>,
    fallback: Option<&str>,
) -> ClientError {
    match outcome {
        Ok(response) => normalize_response(response, fallback),
        Err(err) => normalize_transport(err),
    }
}

/// Classify a received non-2xx response.
///
/// A body of the form `{"kind", "msg", "details"?}` yields [`ClientError::Api`];
/// anything else (empty, HTML, JSON of another shape) yields
/// [`ClientError::HttpStatus`] carrying `fallback`. The result depends only on
/// status, status text and body.
#[must_use]
pub fn normalize_response(response: &RawResponse, fallback: Option<&str>) -> ClientError {
    match ErrorBody::parse(response.body()) {
        Some(body) => ClientError::Api {
            kind: body.kind,
            message: body.msg,
            status: response.status(),
            details: body.details,
        },
        None => ClientError::HttpStatus {
            status: response.status(),
            status_text: response.status_text().to_owned(),
            message: fallback.map(str::to_owned),
        },
    }
}

#[must_use]
pub fn normalize_transport(err: &TransportError) -> ClientError {
    ClientError::Transport {
        message: err.to_string(),
    }
}
