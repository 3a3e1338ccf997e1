//! Query tools - task status and history lookups

use super::resolve_task_id;
use crate::client::TaskManagerClient;
use crate::models::OperationResult;
use rig::tool::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::sync::Arc;

// ============================================================================
// GetTaskTool
// ============================================================================

pub struct GetTaskTool {
    client: Arc<dyn TaskManagerClient>,
}

impl GetTaskTool {
    pub fn new(client: Arc<dyn TaskManagerClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetTaskArgs {
    /// Session unique identifier
    pub session_id: String,
}

impl Tool for GetTaskTool {
    const NAME: &'static str = "get_task";

    type Args = GetTaskArgs;
    type Output = OperationResult;
    type Error = Infallible;

    async fn definition(&self, _prompt: String) -> rig::completion::ToolDefinition {
        rig::completion::ToolDefinition {
            name: Self::NAME.to_string(),
            description: "Get the current status snapshot of the task tracked for a session"
                .to_string(),
            parameters: serde_json::to_value(schemars::schema_for!(GetTaskArgs))
                .unwrap_or_default(),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        Ok(self.client.get_task(None, Some(&args.session_id)).await)
    }
}

// ============================================================================
// GetTaskHistoryTool
// ============================================================================

pub struct GetTaskHistoryTool {
    client: Arc<dyn TaskManagerClient>,
}

impl GetTaskHistoryTool {
    pub fn new(client: Arc<dyn TaskManagerClient>) -> Self {
        Self { client }
    }
}

fn default_limit() -> u32 {
    100
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetTaskHistoryArgs {
    /// Session unique identifier
    pub session_id: String,
    /// Maximum number of history records to return
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Number of history records to skip
    #[serde(default)]
    pub offset: u32,
}

impl Tool for GetTaskHistoryTool {
    const NAME: &'static str = "get_task_history";

    type Args = GetTaskHistoryArgs;
    type Output = OperationResult;
    type Error = Infallible;

    async fn definition(&self, _prompt: String) -> rig::completion::ToolDefinition {
        rig::completion::ToolDefinition {
            name: Self::NAME.to_string(),
            description:
                "Get the complete history of a session's task: status changes and log records"
                    .to_string(),
            parameters: serde_json::to_value(schemars::schema_for!(GetTaskHistoryArgs))
                .unwrap_or_default(),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        // History is task_id-keyed; resolve the session first
        let task_id = match resolve_task_id(self.client.as_ref(), &args.session_id).await {
            Ok(task_id) => task_id,
            Err(result) => return Ok(result),
        };

        Ok(self
            .client
            .get_task_history(&task_id, args.limit, args.offset)
            .await)
    }
}
