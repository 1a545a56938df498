#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Query primitives shared by every paginated endpoint
//!
//! - [`Query`]: opaque filter expression, passed through untouched
//! - [`Pagination`]: `limit`/`offset` window, validated at construction
//! - [`OrderBy`]: ordered sort keys
//! - [`build_query_request`]: turns the above into an [`HttpRequest`](pe_http::HttpRequest)
//! - [`decode`]: lenient or strict JSON decoding of response bodies

pub mod builder;
pub mod decode;
pub mod page;

pub use builder::build_query_request;
pub use decode::{DecodeError, DecodeMode, decode};
pub use page::Page;

use serde::{Deserialize, Serialize};

/// Errors raised while constructing query parameters; never by a fetch
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueryError {
    #[error("INVALID_LIMIT: page size must be greater than zero")]
    InvalidLimit,

    #[error("invalid order_by field: '{0}'")]
    InvalidOrderByField(String),
}

/// Opaque filter expression, e.g. a `PuppetDB` AST query `["=", "name", "kernel"]`.
///
/// An empty query means "no filter" and is left off the request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    #[must_use]
    pub fn new(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }

    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for Query {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Query {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Page window: `limit` records starting at `offset`.
///
/// `limit` is always greater than zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    limit: u64,
    offset: u64,
}

impl Pagination {
    /// # Errors
    /// Returns [`QueryError::InvalidLimit`] if `limit` is zero.
    pub fn new(limit: u64, offset: u64) -> Result<Self, QueryError> {
        if limit == 0 {
            return Err(QueryError::InvalidLimit);
        }
        Ok(Self { limit, offset })
    }

    /// First page of size `limit`
    ///
    /// # Errors
    /// Returns [`QueryError::InvalidLimit`] if `limit` is zero.
    pub fn first(limit: u64) -> Result<Self, QueryError> {
        Self::new(limit, 0)
    }

    #[must_use]
    pub fn limit(&self) -> u64 {
        self.limit
    }

    #[must_use]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Window moved forward by `count` records, keeping the limit
    #[must_use]
    pub fn advanced_by(self, count: u64) -> Self {
        Self {
            offset: self.offset.saturating_add(count),
            ..self
        }
    }
}

// Ordering primitives
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDir {
    #[serde(rename = "asc")]
    Asc,
    #[serde(rename = "desc")]
    Desc,
}

impl SortDir {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

/// One sort key; serialized in the `PuppetDB` wire shape `{"field": .., "order": ..}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderKey {
    pub field: String,
    #[serde(rename = "order")]
    pub dir: SortDir,
}

impl OrderKey {
    #[must_use]
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            dir: SortDir::Asc,
        }
    }

    #[must_use]
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            dir: SortDir::Desc,
        }
    }
}

/// Ordered sort keys; the first key is the primary sort.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct OrderBy(Vec<OrderKey>);

impl OrderBy {
    pub fn empty() -> Self {
        Self(vec![])
    }

    /// # Errors
    /// Returns [`QueryError::InvalidOrderByField`] if any key has an empty field name.
    pub fn from_keys(keys: impl IntoIterator<Item = OrderKey>) -> Result<Self, QueryError> {
        keys.into_iter().try_fold(Self::empty(), Self::then)
    }

    /// Append a lower-priority sort key
    ///
    /// # Errors
    /// Returns [`QueryError::InvalidOrderByField`] if the field name is empty.
    pub fn then(mut self, key: OrderKey) -> Result<Self, QueryError> {
        if key.field.trim().is_empty() {
            return Err(QueryError::InvalidOrderByField(key.field));
        }
        self.0.push(key);
        Ok(self)
    }

    /// Parse signed tokens, e.g. `"+certname,-name"`; unsigned tokens sort ascending
    ///
    /// # Errors
    /// Returns [`QueryError::InvalidOrderByField`] if a token has no field name.
    pub fn from_signed_tokens(signed: &str) -> Result<Self, QueryError> {
        let mut out = Self::empty();
        for seg in signed.split(',') {
            let seg = seg.trim();
            if seg.is_empty() {
                continue;
            }
            let key = if let Some(name) = seg.strip_prefix('+') {
                OrderKey::asc(name)
            } else if let Some(name) = seg.strip_prefix('-') {
                OrderKey::desc(name)
            } else {
                OrderKey::asc(seg)
            };
            if key.field.is_empty() {
                return Err(QueryError::InvalidOrderByField(seg.to_owned()));
            }
            out = out.then(key)?;
        }
        Ok(out)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn keys(&self) -> &[OrderKey] {
        &self.0
    }

    /// Render as the `order_by` query parameter, `None` when there are no keys
    #[must_use]
    pub fn to_param(&self) -> Option<String> {
        if self.0.is_empty() {
            return None;
        }
        let keys = self
            .0
            .iter()
            .map(|key| {
                serde_json::json!({
                    "field": key.field,
                    "order": key.dir.as_str(),
                })
            })
            .collect();
        Some(serde_json::Value::Array(keys).to_string())
    }
}

impl std::fmt::Display for OrderBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "(none)");
        }

        let formatted: Vec<String> = self
            .0
            .iter()
            .map(|key| format!("{} {}", key.field, key.dir.as_str()))
            .collect();

        write!(f, "{}", formatted.join(", "))
    }
}
