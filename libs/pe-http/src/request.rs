use bytes::Bytes;
use http::Method;
use serde::Serialize;

/// Description of a single HTTP exchange, consumed by a [`Transport`](crate::Transport).
///
/// Paths are relative to the transport's base URL. Query pairs keep their
/// insertion order and are URL-encoded by the transport.
///
/// # Example
///
/// ```ignore
/// let request = HttpRequest::get("/pdb/query/v4/facts")
///     .query_param("query", r#"["=", "name", "kernel"]"#)
///     .query_param("limit", "100");
///
/// let request = HttpRequest::post("/orchestrator/v1/command/stop")
///     .json(&StopRequest { job: "1234".into() })?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct HttpRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Bytes>,
}

impl HttpRequest {
    /// Create a request with an arbitrary method
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Create a GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Create a POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Create a DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter
    pub fn query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Set a JSON request body
    ///
    /// # Errors
    /// Returns the serialization error if `body` cannot be encoded as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, serde_json::Error> {
        self.body = Some(Bytes::from(serde_json::to_vec(body)?));
        Ok(self)
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query pairs in insertion order
    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Value of the first query parameter named `name`
    #[must_use]
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Encoded JSON body, if any
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_params_keep_order() {
        let request = HttpRequest::get("/facts")
            .query_param("limit", "10")
            .query_param("offset", "0")
            .query_param("limit", "20");

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.query().len(), 3);
        assert_eq!(request.query()[1], ("offset".to_owned(), "0".to_owned()));
        assert_eq!(request.query_value("limit"), Some("10"));
        assert_eq!(request.query_value("order_by"), None);
    }

    #[test]
    fn test_json_body() {
        let request = HttpRequest::post("/command/stop")
            .json(&json!({ "job": "1234" }))
            .unwrap();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.body().unwrap().as_ref(), br#"{"job":"1234"}"#);
    }

    #[test]
    fn test_get_has_no_body() {
        assert!(HttpRequest::get("/roles").body().is_none());
    }
}
