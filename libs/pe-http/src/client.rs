use crate::builder::HttpClientBuilder;
use crate::config::AUTH_TOKEN_HEADER;
use crate::error::{InvalidUriKind, TransportError};
use crate::request::HttpRequest;
use crate::response::RawResponse;
use crate::transport::Transport;
use http::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use std::io::Read;
use url::Url;

/// Blocking HTTP client bound to one service base URL.
///
/// Cheap to clone; clones share the underlying connection pool.
///
/// # Example
///
/// ```ignore
/// let client = HttpClient::builder("https://orchestrator.example.com:8143")
///     .token(SecretString::from(token))
///     .build()?;
/// let response = client.execute(&HttpRequest::get("/orchestrator/v1/jobs"))?;
/// ```
#[derive(Clone)]
pub struct HttpClient {
    pub(crate) agent: ureq::Agent,
    pub(crate) base_url: Url,
    pub(crate) token: Option<SecretString>,
    pub(crate) max_body_size: usize,
}

impl HttpClient {
    /// Create a builder for a client rooted at `base_url`
    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> HttpClientBuilder {
        HttpClientBuilder::new(base_url)
    }

    /// Base URL every request path is resolved against
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn request_url(&self, request: &HttpRequest) -> Result<Url, TransportError> {
        let raw = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            request.path().trim_start_matches('/')
        );
        let mut url = Url::parse(&raw).map_err(|e| TransportError::InvalidUri {
            url: raw.clone(),
            kind: InvalidUriKind::ParseError,
            reason: e.to_string(),
        })?;

        if !request.query().is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in request.query() {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }

    fn read_response(&self, response: ureq::Response) -> Result<RawResponse, TransportError> {
        let status = StatusCode::from_u16(response.status()).map_err(|e| {
            TransportError::Transport(Box::new(e))
        })?;
        let status_text = response.status_text().to_owned();

        let headers: Vec<(String, String)> = response
            .headers_names()
            .into_iter()
            .flat_map(|name| {
                response
                    .all(&name)
                    .into_iter()
                    .map(|value| (name.clone(), value.to_owned()))
                    .collect::<Vec<_>>()
            })
            .collect();

        // Read one byte past the limit to detect oversized bodies.
        let limit = self.max_body_size;
        let mut body = Vec::new();
        response
            .into_reader()
            .take((limit as u64).saturating_add(1))
            .read_to_end(&mut body)?;
        if body.len() > limit {
            return Err(TransportError::BodyTooLarge {
                limit,
                actual: body.len(),
            });
        }

        let mut raw = RawResponse::new(status, body).with_status_text(status_text);
        for (name, value) in &headers {
            raw = raw.with_header(name, value);
        }
        Ok(raw)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("max_body_size", &self.max_body_size)
            .finish_non_exhaustive()
    }
}

impl Transport for HttpClient {
    fn execute(&self, request: &HttpRequest) -> Result<RawResponse, TransportError> {
        let url = self.request_url(request)?;

        let mut call = self
            .agent
            .request_url(request.method().as_str(), &url)
            .set("Accept", "application/json");
        if let Some(token) = &self.token {
            call = call.set(AUTH_TOKEN_HEADER, token.expose_secret());
        }

        tracing::debug!(
            method = %request.method(),
            path = request.path(),
            query_params = request.query().len(),
            "sending request"
        );

        let result = match request.body() {
            Some(body) => call
                .set("Content-Type", "application/json")
                .send_bytes(body),
            None => call.call(),
        };

        let response = match result {
            Ok(response) | Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(transport)) => {
                let err = TransportError::from(transport);
                tracing::debug!(path = request.path(), error = %err, "request failed");
                return Err(err);
            }
        };

        let response = self.read_response(response)?;
        tracing::debug!(
            path = request.path(),
            status = response.status().as_u16(),
            bytes = response.body().len(),
            "response received"
        );
        Ok(response)
    }
}
