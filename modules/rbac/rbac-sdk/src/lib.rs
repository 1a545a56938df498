//! RBAC SDK
//!
//! Roles and users of the PE RBAC service (`/rbac-api/v1/*`):
//! - `RbacApi` trait
//! - `RbacClient`, its HTTP implementation over [`pe_sdk::ApiClient`]
//! - `Role`, `NewRole`, `Permission` and `User` models
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod client;
pub mod models;

pub use api::RbacApi;
pub use client::RbacClient;
pub use models::{NewRole, Permission, Role, User};
