//! Tool registry for sharing the task tracking tools
//!
//! Holds the four tools behind `Arc` so one client instance backs every
//! tool. This is the registration shim boundary: an MCP host (or the CLI)
//! takes tools from here and exposes them however it likes.

use super::{GetTaskHistoryTool, GetTaskTool, HealthCheckTool, UpdateTaskTool};
use crate::client::TaskManagerClient;
use rig::tool::Tool;
use std::sync::Arc;

#[derive(Clone)]
pub struct ToolRegistry {
    pub update_task: Arc<UpdateTaskTool>,
    pub get_task: Arc<GetTaskTool>,
    pub get_task_history: Arc<GetTaskHistoryTool>,
    pub health_check: Arc<HealthCheckTool>,
}

impl ToolRegistry {
    /// Create a registry where every tool shares the given client
    pub fn new(client: Arc<dyn TaskManagerClient>) -> Self {
        Self {
            update_task: Arc::new(UpdateTaskTool::new(client.clone())),
            get_task: Arc::new(GetTaskTool::new(client.clone())),
            get_task_history: Arc::new(GetTaskHistoryTool::new(client.clone())),
            health_check: Arc::new(HealthCheckTool::new(client)),
        }
    }

    /// Get a list of all tool names
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            UpdateTaskTool::NAME,
            GetTaskTool::NAME,
            GetTaskHistoryTool::NAME,
            HealthCheckTool::NAME,
        ]
    }

    /// Get tool descriptions for a host's system prompt
    pub fn tool_descriptions(&self) -> String {
        format!(
            r#"Available tools:

1. {} - Report a task status change (running/success/failed)
2. {} - Get the current task snapshot for a session
3. {} - Get a task's status history and logs
4. {} - Check Task Manager service health"#,
            UpdateTaskTool::NAME,
            GetTaskTool::NAME,
            GetTaskHistoryTool::NAME,
            HealthCheckTool::NAME,
        )
    }

    /// Check if a tool is registered
    pub fn is_tool_enabled(&self, tool_name: &str) -> bool {
        self.tool_names().contains(&tool_name)
    }

    /// Get tool count
    pub fn tool_count(&self) -> usize {
        self.tool_names().len()
    }
}
