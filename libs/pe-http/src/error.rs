use thiserror::Error;

/// Classification of URL validation failures.
///
/// Provides programmatic matching for different failure modes without
/// relying on unstable error message strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidUriKind {
    /// URL could not be parsed (malformed syntax)
    ParseError,
    /// URL is missing required host/authority component
    MissingAuthority,
    /// URL carries a query or fragment, which belongs on the request instead
    UnexpectedComponent,
}

/// Connection-level failure: no HTTP response was received.
///
/// HTTP error statuses are never reported here; they are returned as
/// ordinary [`RawResponse`](crate::RawResponse) values.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TransportError {
    /// Invalid URL (failed to parse or compose)
    ///
    /// Use the `kind` field for programmatic matching. The `reason` field contains
    /// a diagnostic message intended for logging only.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUri {
        /// The URL that failed to parse
        url: String,
        /// Structured failure classification for programmatic matching
        kind: InvalidUriKind,
        /// Diagnostic message (unstable format, for logging only)
        reason: String,
    },

    /// Invalid URL scheme for transport security configuration
    #[error("URL scheme '{scheme}' not allowed: {reason}")]
    InvalidScheme {
        /// The URL scheme that was rejected
        scheme: String,
        /// Reason the scheme was rejected
        reason: String,
    },

    /// DNS resolution or TCP/TLS connect failed
    #[error("Connection failed: {0}")]
    Connect(String),

    /// Connect or read timeout elapsed
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Response body exceeded size limit
    #[error("Response body too large: limit {limit} bytes, got at least {actual} bytes")]
    BodyTooLarge { limit: usize, actual: usize },

    /// Any other transport failure (I/O while reading, protocol errors, ...)
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<ureq::Transport> for TransportError {
    fn from(err: ureq::Transport) -> Self {
        use ureq::ErrorKind;

        match err.kind() {
            ErrorKind::Dns | ErrorKind::ConnectionFailed => Self::Connect(err.to_string()),
            ErrorKind::Io if is_timeout(&err) => Self::Timeout(err.to_string()),
            ErrorKind::InvalidUrl => Self::InvalidUri {
                url: err.url().map(ToString::to_string).unwrap_or_default(),
                kind: InvalidUriKind::ParseError,
                reason: err.to_string(),
            },
            _ => Self::Transport(Box::new(err)),
        }
    }
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::TimedOut {
            Self::Timeout(err.to_string())
        } else {
            Self::Transport(Box::new(err))
        }
    }
}

fn is_timeout(err: &ureq::Transport) -> bool {
    std::error::Error::source(err)
        .and_then(|source| source.downcast_ref::<std::io::Error>())
        .is_some_and(|io| {
            matches!(
                io.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
            )
        })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug)]
    struct TestError(&'static str);

    impl fmt::Display for TestError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl Error for TestError {}

    #[test]
    fn test_transport_error_preserves_source() {
        let err = TransportError::Transport(Box::new(TestError("connection reset")));

        let source = err.source().unwrap();
        let downcast = source.downcast_ref::<TestError>();
        assert_eq!(downcast.unwrap().0, "connection reset");
    }

    #[test]
    fn test_io_timeout_maps_to_timeout() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "read timed out");
        let err = TransportError::from(io);
        assert!(matches!(err, TransportError::Timeout(_)));
    }

    #[test]
    fn test_other_io_maps_to_transport() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err = TransportError::from(io);
        assert!(matches!(err, TransportError::Transport(_)));
    }

    #[test]
    fn test_body_too_large_display() {
        let err = TransportError::BodyTooLarge {
            limit: 16,
            actual: 17,
        };
        assert_eq!(
            err.to_string(),
            "Response body too large: limit 16 bytes, got at least 17 bytes"
        );
    }
}
