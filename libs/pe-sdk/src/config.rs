//! SDK configuration
//!
//! Sources, lowest to highest precedence:
//! 1. built-in defaults
//! 2. an optional YAML file
//! 3. environment variables prefixed `PE_SDK_`, nested keys split on `__`
//!    (`PE_SDK_HTTP__REQUEST_TIMEOUT=5s`, `PE_SDK_RBAC_URL=https://...`)
//!
//! ```yaml
//! orchestrator_url: https://pe.example.com:8143
//! puppetdb_url: https://pe.example.com:8081
//! rbac_url: https://pe.example.com:4433
//! strict: true
//! http:
//!   request_timeout: 30s
//!   token: 0Ab1...
//! ```

use crate::client::ApiClient;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use pe_http::{HttpClient, HttpClientConfig, TransportError};
use pe_query::DecodeMode;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "PE_SDK_";

/// The PE services the SDK talks to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Service {
    Orchestrator,
    PuppetDb,
    Rbac,
}

impl Service {
    /// Port the service listens on in a default installation
    #[must_use]
    pub fn default_port(self) -> u16 {
        match self {
            Service::Orchestrator => 8143,
            Service::PuppetDb => 8081,
            Service::Rbac => 4433,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Service::Orchestrator => "orchestrator",
            Service::PuppetDb => "puppetdb",
            Service::Rbac => "rbac",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("no base URL configured for {0} (set PE_SDK_{env}_URL)", env = .0.as_str().to_uppercase())]
    MissingUrl(Service),

    #[error("cannot build HTTP client: {0}")]
    Http(#[from] TransportError),
}

/// SDK configuration: shared HTTP settings plus one base URL per service
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SdkConfig {
    pub http: HttpClientConfig,
    pub orchestrator_url: Option<String>,
    pub puppetdb_url: Option<String>,
    pub rbac_url: Option<String>,
    /// Reject response fields the SDK does not know about
    pub strict: bool,
}

impl SdkConfig {
    /// Load from an optional YAML file overlaid with `PE_SDK_*` environment variables.
    ///
    /// A missing file is treated as empty.
    ///
    /// # Errors
    /// Returns [`ConfigError::Load`] if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        Self::from_figment(&figment)
    }

    /// Extract from a caller-assembled figment
    ///
    /// # Errors
    /// Returns [`ConfigError::Load`] if extraction fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract().map_err(Box::new)?;
        tracing::debug!(
            orchestrator = config.orchestrator_url.is_some(),
            puppetdb = config.puppetdb_url.is_some(),
            rbac = config.rbac_url.is_some(),
            strict = config.strict,
            "sdk configuration loaded"
        );
        Ok(config)
    }

    #[must_use]
    pub fn base_url(&self, service: Service) -> Option<&str> {
        match service {
            Service::Orchestrator => self.orchestrator_url.as_deref(),
            Service::PuppetDb => self.puppetdb_url.as_deref(),
            Service::Rbac => self.rbac_url.as_deref(),
        }
    }

    #[must_use]
    pub fn decode_mode(&self) -> DecodeMode {
        DecodeMode::from_strict(self.strict)
    }

    /// Build an [`ApiClient`] for `service`
    ///
    /// # Errors
    /// - [`ConfigError::MissingUrl`] if no base URL is configured for `service`
    /// - [`ConfigError::Http`] if the base URL is invalid or its scheme is not
    ///   allowed by the transport security mode
    pub fn api_client(&self, service: Service) -> Result<ApiClient, ConfigError> {
        let base_url = self
            .base_url(service)
            .ok_or(ConfigError::MissingUrl(service))?;
        let http = HttpClient::builder(base_url)
            .with_config(self.http.clone())
            .build()?;
        Ok(ApiClient::new(http).with_decode_mode(self.decode_mode()))
    }
}
