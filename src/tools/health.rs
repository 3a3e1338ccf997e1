//! Health check tool - service reachability and effective configuration

use crate::client::TaskManagerClient;
use crate::models::OperationResult;
use rig::tool::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::sync::Arc;

pub struct HealthCheckTool {
    client: Arc<dyn TaskManagerClient>,
}

impl HealthCheckTool {
    pub fn new(client: Arc<dyn TaskManagerClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HealthCheckArgs {}

impl Tool for HealthCheckTool {
    const NAME: &'static str = "health_check";

    type Args = HealthCheckArgs;
    type Output = OperationResult;
    type Error = Infallible;

    async fn definition(&self, _prompt: String) -> rig::completion::ToolDefinition {
        rig::completion::ToolDefinition {
            name: Self::NAME.to_string(),
            description: "Check Task Manager service health and report the effective client configuration".to_string(),
            parameters: serde_json::to_value(schemars::schema_for!(HealthCheckArgs))
                .unwrap_or_default(),
        }
    }

    async fn call(&self, _args: Self::Args) -> Result<Self::Output, Self::Error> {
        Ok(self.client.health_check().await)
    }
}
