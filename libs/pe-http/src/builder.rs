use crate::HttpClient;
use crate::config::{HttpClientConfig, TransportSecurity};
use crate::error::{InvalidUriKind, TransportError};
use secrecy::SecretString;
use std::time::Duration;
use url::Url;

/// Builder for constructing an [`HttpClient`] bound to one base URL.
pub struct HttpClientBuilder {
    base_url: String,
    config: HttpClientConfig,
}

impl HttpClientBuilder {
    /// Create a new builder with default configuration
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            config: HttpClientConfig::default(),
        }
    }

    /// Replace the whole configuration
    #[must_use]
    pub fn with_config(mut self, config: HttpClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Set the connect timeout
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the user agent string
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the RBAC token sent with every request
    #[must_use]
    pub fn token(mut self, token: SecretString) -> Self {
        self.config.token = Some(token);
        self
    }

    /// Set the maximum response body size
    #[must_use]
    pub fn max_body_size(mut self, size: usize) -> Self {
        self.config.max_body_size = size;
        self
    }

    /// Set the maximum number of redirects to follow
    ///
    /// `0` (the default) hands 3xx responses back to the caller.
    #[must_use]
    pub fn max_redirects(mut self, max_redirects: u32) -> Self {
        self.config.max_redirects = max_redirects;
        self
    }

    /// Set transport security mode
    #[must_use]
    pub fn transport(mut self, transport: TransportSecurity) -> Self {
        self.config.transport = transport;
        self
    }

    /// Allow insecure HTTP connections (for testing only)
    ///
    /// Equivalent to `.transport(TransportSecurity::AllowInsecureHttp)`.
    ///
    /// **WARNING**: This should only be used for local testing with mock servers.
    #[must_use]
    pub fn allow_insecure_http(mut self) -> Self {
        tracing::warn!(
            target: "pe_http::security",
            "allow_insecure_http() called - HTTP traffic will NOT be encrypted"
        );
        self.config.transport = TransportSecurity::AllowInsecureHttp;
        self
    }

    /// Validate the base URL and build the client
    ///
    /// # Errors
    /// - [`TransportError::InvalidUri`] if the base URL does not parse, has no
    ///   host, or carries a query string or fragment
    /// - [`TransportError::InvalidScheme`] if the scheme is not allowed by the
    ///   configured [`TransportSecurity`]
    pub fn build(self) -> Result<HttpClient, TransportError> {
        let base_url = parse_base_url(&self.base_url)?;
        check_scheme(&base_url, self.config.transport)?;

        if self.config.transport == TransportSecurity::AllowInsecureHttp {
            tracing::warn!(
                "insecure HTTP enabled (TransportSecurity::AllowInsecureHttp); \
                 use only for testing with mock servers"
            );
        }

        let agent = ureq::AgentBuilder::new()
            .timeout_connect(self.config.connect_timeout)
            .timeout(self.config.request_timeout)
            .user_agent(&self.config.user_agent)
            .redirects(self.config.max_redirects)
            .build();

        tracing::debug!(
            base_url = %base_url,
            timeout = ?self.config.request_timeout,
            "http client built"
        );

        Ok(HttpClient {
            agent,
            base_url,
            token: self.config.token,
            max_body_size: self.config.max_body_size,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, TransportError> {
    let invalid = |kind, reason: String| TransportError::InvalidUri {
        url: raw.to_owned(),
        kind,
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(InvalidUriKind::ParseError, e.to_string()))?;

    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid(
            InvalidUriKind::MissingAuthority,
            "base URL has no host".to_owned(),
        ));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(
            InvalidUriKind::UnexpectedComponent,
            "base URL must not carry a query string or fragment".to_owned(),
        ));
    }

    Ok(url)
}

fn check_scheme(url: &Url, transport: TransportSecurity) -> Result<(), TransportError> {
    match (url.scheme(), transport) {
        ("https", _) | ("http", TransportSecurity::AllowInsecureHttp) => Ok(()),
        ("http", TransportSecurity::TlsOnly) => Err(TransportError::InvalidScheme {
            scheme: "http".to_owned(),
            reason: "HTTP not allowed with TransportSecurity::TlsOnly".to_owned(),
        }),
        (other, _) => Err(TransportError::InvalidScheme {
            scheme: other.to_owned(),
            reason: "only http and https are supported".to_owned(),
        }),
    }
}
