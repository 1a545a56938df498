//! PE SDK core
//!
//! [`ApiClient`] is the one entry point the endpoint crates build on. It owns
//! a [`Transport`](pe_http::Transport), a [`DecodeMode`](pe_query::DecodeMode)
//! and implements the two call shapes every endpoint reduces to:
//! - execute a query (GET with filter, pagination and ordering parameters)
//! - execute a command (JSON body in, JSON body out)
//!
//! [`PageCursor`] walks a paginated query endpoint page by page.
//!
//! # Example
//!
//! ```rust,ignore
//! use pe_sdk::{SdkConfig, Service};
//! use pe_query::{OrderBy, Pagination, Query};
//!
//! let config = SdkConfig::load(Some("pe-sdk.yaml".as_ref()))?;
//! let client = config.api_client(Service::PuppetDb)?;
//!
//! let mut cursor = client.cursor::<serde_json::Value>(
//!     "/pdb/query/v4/facts",
//!     Query::new(r#"["=", "name", "kernel"]"#),
//!     Pagination::first(100)?,
//!     OrderBy::empty(),
//! );
//! loop {
//!     let page = cursor.next_page()?;
//!     handle(page.items);
//!     if page.end_of_stream {
//!         break;
//!     }
//! }
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod client;
pub mod config;
pub mod pager;

pub use client::ApiClient;
pub use config::{ConfigError, SdkConfig, Service};
pub use pager::{CursorState, Items, PageCursor};

pub use pe_errors::ClientError;
pub use pe_query::{DecodeMode, OrderBy, OrderKey, Page, Pagination, Query, QueryError, SortDir};
