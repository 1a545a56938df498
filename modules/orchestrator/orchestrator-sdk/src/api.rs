//! Orchestrator API trait.

use pe_sdk::ClientError;

use crate::models::{
    DeployRequest, JobId, PlanRunJobId, PlanRunRequest, ScheduleTaskRequest, ScheduledJobId,
    StopJobId, StopRequest, TaskRequest, TaskTargetJobId, TaskTargetRequest,
};

/// Orchestrator command API.
///
/// Every command is a `POST` with a JSON body. Failures are normalized
/// [`ClientError`]s; a rejected command usually comes back as
/// [`ClientError::Api`] with a `puppetlabs.orchestrator/*` kind.
pub trait OrchestratorApi: Send + Sync {
    /// Run a permitted task across a set of nodes.
    ///
    /// # Errors
    /// Returns the normalized error of the failed call.
    fn command_task(&self, request: &TaskRequest) -> Result<JobId, ClientError>;

    /// Schedule a task to run at a future date and time.
    ///
    /// # Errors
    /// Returns the normalized error of the failed call.
    fn command_schedule_task(
        &self,
        request: &ScheduleTaskRequest,
    ) -> Result<ScheduledJobId, ClientError>;

    /// Create a task-target: tasks, nodes and node groups forming a permission group.
    ///
    /// # Errors
    /// Returns the normalized error of the failed call.
    fn command_task_target(
        &self,
        request: &TaskTargetRequest,
    ) -> Result<TaskTargetJobId, ClientError>;

    /// Run a plan through the plan executor.
    ///
    /// # Errors
    /// Returns the normalized error of the failed call.
    fn command_plan_run(&self, request: &PlanRunRequest) -> Result<PlanRunJobId, ClientError>;

    /// Stop a job that is in progress.
    ///
    /// # Errors
    /// Returns the normalized error of the failed call.
    fn command_stop(&self, request: &StopRequest) -> Result<StopJobId, ClientError>;

    /// Run Puppet across the nodes of an environment.
    ///
    /// # Errors
    /// Returns the normalized error of the failed call.
    fn command_deploy(&self, request: &DeployRequest) -> Result<JobId, ClientError>;
}
