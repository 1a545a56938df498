use http::StatusCode;
use pe_http::TransportError;
use thiserror::Error;

/// Normalized error returned by every SDK call.
///
/// Exactly one variant describes each failure; the classification happens
/// once, in [`normalize`](crate::normalize), and is never re-derived.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ClientError {
    /// No HTTP response was received (DNS, connect, TLS, timeout, ...)
    #[error("transport failure: {message}")]
    Transport { message: String },

    /// Non-2xx response whose body is not a structured error
    #[error("HTTP {} {status_text}{}", .status.as_u16(), fallback_suffix(.message.as_deref()))]
    HttpStatus {
        status: StatusCode,
        /// Reason phrase as sent by the server
        status_text: String,
        /// Caller-supplied context, e.g. `"/rbac-api/v1/roles error"`
        message: Option<String>,
    },

    /// Non-2xx response carrying a structured `{kind, msg}` body
    #[error("API error {} ({kind}): {message}", .status.as_u16())]
    Api {
        kind: String,
        message: String,
        status: StatusCode,
        details: Option<serde_json::Value>,
    },

    /// Successful response that does not match the expected shape
    #[error("schema mismatch: {message}")]
    Schema {
        message: String,
        /// Paths of fields present in the body but unknown to the target type
        unknown_fields: Vec<String>,
    },

    /// The request could not be built (e.g. body encoding failed); nothing was sent
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },
}

impl ClientError {
    /// HTTP status of the failed exchange, if a response was received
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpStatus { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Schema { .. } | Self::InvalidRequest { .. } => None,
        }
    }

    /// Machine-readable error category of an [`ClientError::Api`] error
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Api { kind, .. } => Some(kind),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// `true` when the server answered 404, structured body or not
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }
}

impl From<TransportError> for ClientError {
    fn from(err: TransportError) -> Self {
        crate::normalize::normalize_transport(&err)
    }
}

fn fallback_suffix(message: Option<&str>) -> String {
    message.map(|m| format!(": {m}")).unwrap_or_default()
}
