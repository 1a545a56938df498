use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

/// Default User-Agent string for HTTP requests
pub const DEFAULT_USER_AGENT: &str = concat!("pe-sdk/", env!("CARGO_PKG_VERSION"));

/// Header carrying the RBAC token on every request
pub const AUTH_TOKEN_HEADER: &str = "X-Authentication";

/// Transport security configuration
///
/// Controls whether the client enforces TLS or allows insecure HTTP.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum TransportSecurity {
    /// Only `https://` base URLs are accepted (default)
    #[default]
    TlsOnly,
    /// Plain `http://` base URLs are accepted as well
    ///
    /// **WARNING**: Use only for local testing with mock servers.
    AllowInsecureHttp,
}

/// HTTP client configuration
///
/// Deserializable from configuration files; durations use humantime strings
/// (`"30s"`, `"1m 30s"`). Unknown keys are rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpClientConfig {
    /// Overall timeout for one request, connect + send + read (default: 30s)
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,

    /// Timeout for establishing the TCP/TLS connection (default: 10s)
    #[serde(with = "humantime_serde")]
    pub connect_timeout: Duration,

    /// Maximum accepted response body size in bytes (default: 10 MB)
    pub max_body_size: usize,

    /// User-Agent header value
    pub user_agent: String,

    /// Maximum number of redirects to follow (default: 0)
    ///
    /// With `0`, 3xx responses are handed back to the caller unchanged. The RBAC
    /// API answers role creation with `303 See Other`, so following redirects
    /// would hide the `Location` of the new role.
    pub max_redirects: u32,

    /// Transport security mode
    pub transport: TransportSecurity,

    /// RBAC token sent as [`AUTH_TOKEN_HEADER`] on every request
    pub token: Option<SecretString>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            max_body_size: 10 * 1024 * 1024, // 10 MB
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            max_redirects: 0,
            transport: TransportSecurity::TlsOnly,
            token: None,
        }
    }
}

impl HttpClientConfig {
    /// Create minimal configuration (small timeouts, 1 MB bodies)
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            max_body_size: 1024 * 1024, // 1 MB
            ..Self::default()
        }
    }

    /// Create configuration for testing with mock servers (allows insecure HTTP)
    ///
    /// **WARNING**: This configuration allows plain HTTP connections.
    /// Use only for local testing with mock servers, never in production.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(2),
            max_body_size: 1024 * 1024, // 1 MB
            transport: TransportSecurity::AllowInsecureHttp,
            ..Self::default()
        }
    }
}

/// Serde adapter for `Duration` fields written as humantime strings.
mod humantime_serde {
    use serde::{Deserialize, Deserializer, de};
    use std::time::Duration;

    pub(super) fn deserialize<'de, D>(d: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(d)?;
        humantime::parse_duration(&raw).map_err(de::Error::custom)
    }
}
