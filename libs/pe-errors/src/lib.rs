//! Normalized errors for the PE SDK
//!
//! Every failed call made through the SDK ends up as exactly one
//! [`ClientError`] variant, whatever went wrong underneath:
//! - connection-level failures become [`ClientError::Transport`]
//! - non-2xx responses with a structured `{kind, msg}` body become [`ClientError::Api`]
//! - non-2xx responses without one become [`ClientError::HttpStatus`]
//! - successful responses that fail strict decoding become [`ClientError::Schema`]
//!
//! [`normalize`] is the single place where raw HTTP outcomes are classified.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod body;
pub mod error;
pub mod normalize;

pub use body::ErrorBody;
pub use error::ClientError;
pub use normalize::{normalize, normalize_response, normalize_transport};
