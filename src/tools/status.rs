//! Update task tool - report a task status change
//!
//! Composite operation: validates the status string, resolves the session's
//! task through `get_task`, then delegates the upsert to the client.

use super::resolve_task_id;
use crate::client::TaskManagerClient;
use crate::models::{OperationResult, TaskStatus, TaskUpdate};
use rig::tool::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::convert::Infallible;
use std::sync::Arc;

pub struct UpdateTaskTool {
    client: Arc<dyn TaskManagerClient>,
}

impl UpdateTaskTool {
    pub fn new(client: Arc<dyn TaskManagerClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskArgs {
    /// Session unique identifier
    pub session_id: String,
    /// Jira ticket number (e.g., "PROJ-123")
    pub jira_ticket: String,
    /// Task status: running, success or failed
    pub status: String,
    /// Current action description
    pub current_action: String,
    /// Status description message
    pub message: String,
    /// Progress percentage (0-100)
    #[serde(default)]
    pub progress_percentage: f64,
    /// Additional task details (optional)
    pub details: Option<Map<String, Value>>,
}

impl Tool for UpdateTaskTool {
    const NAME: &'static str = "update_task";

    type Args = UpdateTaskArgs;
    type Output = OperationResult;
    type Error = Infallible;

    async fn definition(&self, _prompt: String) -> rig::completion::ToolDefinition {
        rig::completion::ToolDefinition {
            name: Self::NAME.to_string(),
            description: "Report a task status change. Status must be one of: running, success, failed. Progress outside 0-100 is clamped.".to_string(),
            parameters: serde_json::to_value(schemars::schema_for!(UpdateTaskArgs))
                .unwrap_or_default(),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        if args.session_id.trim().is_empty() {
            return Ok(OperationResult::failure("session_id must not be empty"));
        }
        if args.jira_ticket.trim().is_empty() {
            return Ok(OperationResult::failure("jira_ticket must not be empty"));
        }

        let status = match args.status.parse::<TaskStatus>() {
            Ok(status) => status,
            Err(e) => return Ok(OperationResult::failure(e.to_string())),
        };

        let task_id = match resolve_task_id(self.client.as_ref(), &args.session_id).await {
            Ok(task_id) => task_id,
            Err(result) => return Ok(result),
        };

        let update = TaskUpdate::new(
            &args.session_id,
            &args.jira_ticket,
            status,
            &args.current_action,
            &args.message,
            args.progress_percentage,
            args.details.unwrap_or_default(),
        );

        tracing::debug!(
            session_id = %args.session_id,
            task_id = %task_id,
            status = %status,
            "Reporting task status"
        );

        let result = self.client.update_task(&task_id, &update).await;

        if result.success {
            Ok(OperationResult::ok_with_message(format!(
                "Session {} status updated successfully",
                args.session_id
            ))
            .with_data(json!({
                "task_update": update.to_value(&task_id),
                "api_response": result.data,
            })))
        } else {
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockTaskManagerClient;

    fn tool_with_mock() -> (UpdateTaskTool, Arc<MockTaskManagerClient>) {
        let client = Arc::new(MockTaskManagerClient::new());
        (UpdateTaskTool::new(client.clone()), client)
    }

    fn sample_args(status: &str) -> UpdateTaskArgs {
        UpdateTaskArgs {
            session_id: "S1".to_string(),
            jira_ticket: "PROJ-1".to_string(),
            status: status.to_string(),
            current_action: "build".to_string(),
            message: "started".to_string(),
            progress_percentage: 10.0,
            details: None,
        }
    }

    #[tokio::test]
    async fn test_invalid_status_names_offending_value() {
        let (tool, _) = tool_with_mock();
        let result = tool.call(sample_args("finished")).await.unwrap();
        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("Invalid status value: finished")
        );
    }

    #[tokio::test]
    async fn test_unknown_session_fails_fast() {
        let (tool, _) = tool_with_mock();
        let result = tool.call(sample_args("running")).await.unwrap();
        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("No task associated with session S1")
        );
    }

    #[tokio::test]
    async fn test_update_through_resolved_session() {
        let (tool, client) = tool_with_mock();

        // Seed the session -> task association
        let seed = TaskUpdate::new(
            "S1",
            "PROJ-1",
            TaskStatus::Running,
            "init",
            "seeded",
            0.0,
            Map::new(),
        );
        client.update_task("T1", &seed).await;

        let result = tool.call(sample_args("success")).await.unwrap();
        assert!(result.success);
        assert_eq!(
            result.message.as_deref(),
            Some("Session S1 status updated successfully")
        );
        let data = result.data.unwrap();
        assert_eq!(data["task_update"]["task_id"], json!("T1"));
        assert_eq!(data["task_update"]["status"], json!("success"));
    }
}
