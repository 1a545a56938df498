use pe_http::Method;
use pe_sdk::{ApiClient, ClientError, ConfigError, SdkConfig, Service};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::OrchestratorApi;
use crate::models::{
    DeployRequest, JobId, PlanRunJobId, PlanRunRequest, ScheduleTaskRequest, ScheduledJobId,
    StopJobId, StopRequest, TaskRequest, TaskTargetJobId, TaskTargetRequest,
};

pub const COMMAND_TASK: &str = "/orchestrator/v1/command/task";
pub const COMMAND_SCHEDULE_TASK: &str = "/orchestrator/v1/command/schedule_task";
pub const COMMAND_TASK_TARGET: &str = "/orchestrator/v1/command/task_target";
pub const COMMAND_PLAN_RUN: &str = "/orchestrator/v1/command/plan_run";
pub const COMMAND_STOP: &str = "/orchestrator/v1/command/stop";
pub const COMMAND_DEPLOY: &str = "/orchestrator/v1/command/deploy";

/// HTTP implementation of [`OrchestratorApi`]
#[derive(Clone, Debug)]
pub struct OrchestratorClient {
    api: ApiClient,
}

impl OrchestratorClient {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Build a client from the orchestrator settings of `config`
    ///
    /// # Errors
    /// Returns [`ConfigError`] if no orchestrator URL is configured or the
    /// HTTP client cannot be built.
    pub fn from_config(config: &SdkConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.api_client(Service::Orchestrator)?))
    }

    fn command<B, R>(&self, path: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        tracing::debug!(path, "submitting orchestrator command");
        self.api.execute_command(Method::POST, path, body)
    }
}

impl OrchestratorApi for OrchestratorClient {
    fn command_task(&self, request: &TaskRequest) -> Result<JobId, ClientError> {
        self.command(COMMAND_TASK, request)
    }

    fn command_schedule_task(
        &self,
        request: &ScheduleTaskRequest,
    ) -> Result<ScheduledJobId, ClientError> {
        self.command(COMMAND_SCHEDULE_TASK, request)
    }

    fn command_task_target(
        &self,
        request: &TaskTargetRequest,
    ) -> Result<TaskTargetJobId, ClientError> {
        self.command(COMMAND_TASK_TARGET, request)
    }

    fn command_plan_run(&self, request: &PlanRunRequest) -> Result<PlanRunJobId, ClientError> {
        self.command(COMMAND_PLAN_RUN, request)
    }

    fn command_stop(&self, request: &StopRequest) -> Result<StopJobId, ClientError> {
        self.command(COMMAND_STOP, request)
    }

    fn command_deploy(&self, request: &DeployRequest) -> Result<JobId, ClientError> {
        self.command(COMMAND_DEPLOY, request)
    }
}
