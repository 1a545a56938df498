//! Structured error body returned by the PE services on non-2xx responses.

use serde::{Deserialize, Deserializer, Serialize};

/// `{"kind": "...", "msg": "...", "details": ...}`
///
/// `msg` is required; a body without it is not considered structured.
/// `kind` may be absent (some RBAC conflicts omit it) and then reads as `""`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "nullable_string")]
    pub kind: String,
    pub msg: String,
    /// Sub-errors or other service-specific detail, kept verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Parse a response body, returning `None` if it does not have the expected shape
    #[must_use]
    pub fn parse(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
