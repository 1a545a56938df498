//! Response body decoding with an explicit strictness mode.

use pe_errors::ClientError;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// How unknown fields in a response body are treated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeMode {
    /// Unknown fields are ignored
    #[default]
    Lenient,
    /// Any field the target type does not know about fails the decode
    Strict,
}

impl DecodeMode {
    #[must_use]
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lenient }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("response contains unknown fields: {}", .fields.join(", "))]
    UnknownFields {
        /// Dotted paths, sequence elements by index (e.g. `1.extra`)
        fields: Vec<String>,
    },
}

/// Decode a JSON response body into `T`.
///
/// # Errors
/// - [`DecodeError::Malformed`] if the body is not valid JSON for `T`
/// - [`DecodeError::UnknownFields`] in [`DecodeMode::Strict`] when the body
///   carries fields `T` does not declare; every such path is reported
pub fn decode<T: DeserializeOwned>(body: &[u8], mode: DecodeMode) -> Result<T, DecodeError> {
    match mode {
        DecodeMode::Lenient => Ok(serde_json::from_slice(body)?),
        DecodeMode::Strict => {
            let mut unknown = Vec::new();
            let mut de = serde_json::Deserializer::from_slice(body);
            let value: T = serde_ignored::deserialize(&mut de, |path| {
                unknown.push(path.to_string());
            })?;
            de.end()?;

            if unknown.is_empty() {
                Ok(value)
            } else {
                Err(DecodeError::UnknownFields { fields: unknown })
            }
        }
    }
}

impl From<DecodeError> for ClientError {
    fn from(err: DecodeError) -> Self {
        let message = err.to_string();
        match err {
            DecodeError::Malformed(_) => ClientError::Schema {
                message,
                unknown_fields: Vec::new(),
            },
            DecodeError::UnknownFields { fields } => ClientError::Schema {
                message,
                unknown_fields: fields,
            },
        }
    }
}
