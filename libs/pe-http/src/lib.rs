#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![warn(warnings)]

//! Blocking HTTP transport for the PE SDK
//!
//! This crate is the lowest layer of the SDK. It issues exactly one HTTP
//! exchange per call and nothing more:
//! - Requests are described by an [`HttpRequest`] (method, path, query pairs, JSON body)
//! - Responses come back as a fully-read [`RawResponse`], whatever the status code
//! - Connection-level failures (DNS, TCP, TLS, timeout) surface as [`TransportError`]
//! - HTTPS only by default; plain HTTP must be enabled explicitly
//! - No retries, no caching, no redirect following unless configured
//!
//! Non-2xx statuses are *not* failures at this layer. Classifying them is the
//! job of the error normalizer in `pe-errors`.
//!
//! # Example
//!
//! ```ignore
//! use pe_http::{HttpClient, HttpRequest, Transport};
//! use std::time::Duration;
//!
//! let client = HttpClient::builder("https://puppetdb.example.com:8081")
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//!
//! let request = HttpRequest::get("/pdb/query/v4/fact-names").query_param("limit", "10");
//! let response = client.execute(&request)?;
//! assert!(response.is_success());
//! ```

mod builder;
mod client;
mod config;
mod error;
mod request;
mod response;
mod transport;

pub use builder::HttpClientBuilder;
pub use client::HttpClient;
pub use config::{AUTH_TOKEN_HEADER, DEFAULT_USER_AGENT, HttpClientConfig, TransportSecurity};
pub use error::{InvalidUriKind, TransportError};
pub use request::HttpRequest;
pub use response::RawResponse;
pub use transport::Transport;

pub use http::{Method, StatusCode};
