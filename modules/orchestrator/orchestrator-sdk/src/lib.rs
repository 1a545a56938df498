//! Orchestrator SDK
//!
//! Typed access to the PE orchestrator command endpoints
//! (`/orchestrator/v1/command/*`):
//! - `OrchestratorApi` trait, one method per command
//! - `OrchestratorClient`, its HTTP implementation over [`pe_sdk::ApiClient`]
//! - request and job-id models
//!
//! ## Usage
//!
//! ```ignore
//! use orchestrator_sdk::{OrchestratorApi, OrchestratorClient, Scope, TaskRequest};
//!
//! let client = OrchestratorClient::from_config(&config)?;
//! let job = client.command_task(&TaskRequest {
//!     environment: Some("production".into()),
//!     task: "package".into(),
//!     params: [("action".into(), "install".into()), ("name".into(), "httpd".into())].into(),
//!     scope: Scope::nodes(["node1.example.com"]),
//! })?;
//! println!("started job {}", job.job.name);
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod client;
pub mod models;

pub use api::OrchestratorApi;
pub use client::OrchestratorClient;
pub use models::{
    DeployRequest, JobId, JobRef, PlanRunJobId, PlanRunRequest, ScheduleTaskRequest,
    ScheduledJobId, Scope, StopJobId, StopRequest, StoppedJob, TaskRequest, TaskTargetJobId,
    TaskTargetRequest,
};
