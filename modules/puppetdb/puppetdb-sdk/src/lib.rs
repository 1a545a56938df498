//! `PuppetDB` SDK
//!
//! Fact queries against the `PuppetDB` v4 API (`/pdb/query/v4/*`):
//! - `PuppetDbApi` trait
//! - `PuppetDbClient`, its HTTP implementation over [`pe_sdk::ApiClient`]
//! - `Fact` / `FactPath` models
//!
//! Queries are `PuppetDB` AST strings and are sent as-is.
//!
//! ```ignore
//! use puppetdb_sdk::{PuppetDbApi, PuppetDbClient};
//! use pe_sdk::{OrderBy, Pagination, Query};
//!
//! let pdb = PuppetDbClient::from_config(&config)?;
//! for fact in pdb
//!     .paginated_facts(Query::new(r#"["=", "name", "kernel"]"#), Pagination::first(500)?, OrderBy::empty())
//!     .into_items()
//! {
//!     let fact = fact?;
//!     println!("{} {}", fact.certname, fact.value);
//! }
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod client;
pub mod models;

pub use api::PuppetDbApi;
pub use client::PuppetDbClient;
pub use models::{Fact, FactPath};
