//! Data model for task status tracking
//!
//! A [`TaskUpdate`] is the snapshot an agent reports for one task at a point
//! in time. Every client and tool operation returns an [`OperationResult`]
//! instead of raising errors across the boundary.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use thiserror::Error;

/// Model validation errors
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid status value: {0}")]
    InvalidStatus(String),
}

// ============================================================================
// TaskStatus
// ============================================================================

/// Task status enumeration. Exactly three states are valid; anything else
/// is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Running,
    Success,
    Failed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(Self::Running),
            "success" => Ok(Self::Success),
            "failed" => Ok(Self::Failed),
            _ => Err(ModelError::InvalidStatus(s.to_string())),
        }
    }
}

// ============================================================================
// TaskUpdate
// ============================================================================

/// One reported state of a task. Immutable once constructed; a new value is
/// built for every report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    pub jira_ticket: String,
    pub status: TaskStatus,
    pub current_action: String,
    /// Clamped to [0, 100] at construction time
    pub progress_percentage: f64,
    pub message: String,
    #[serde(default)]
    pub details: Map<String, Value>,
    /// ISO-8601 UTC timestamp, assigned when the update is created
    pub timestamp: String,
}

impl TaskUpdate {
    /// Build an update stamped with the current UTC time. Out-of-range
    /// progress values are clamped rather than rejected.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        session_id: impl Into<String>,
        jira_ticket: impl Into<String>,
        status: TaskStatus,
        current_action: impl Into<String>,
        message: impl Into<String>,
        progress_percentage: f64,
        details: Map<String, Value>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            task_id: None,
            jira_ticket: jira_ticket.into(),
            status,
            current_action: current_action.into(),
            progress_percentage: progress_percentage.clamp(0.0, 100.0),
            message: message.into(),
            details,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Transport-neutral mapping of this update, with `task_id` injected.
    /// Used as the request body for updates and as the mock's stored snapshot.
    pub fn to_value(&self, task_id: &str) -> Value {
        json!({
            "session_id": self.session_id,
            "task_id": task_id,
            "jira_ticket": self.jira_ticket,
            "status": self.status.as_str(),
            "current_action": self.current_action,
            "progress_percentage": self.progress_percentage,
            "message": self.message,
            "details": self.details,
            "timestamp": self.timestamp,
        })
    }
}

// ============================================================================
// OperationResult
// ============================================================================

/// Uniform success/failure envelope returned by every client operation and
/// every tool. Callers assert on `success` plus the message templates; no
/// operation panics or propagates an error type across this boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl OperationResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            data: None,
            message: None,
            error: None,
            error_code: None,
        }
    }

    pub fn ok_with_data(data: Value) -> Self {
        Self {
            data: Some(data),
            ..Self::ok()
        }
    }

    pub fn ok_with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok()
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
            error_code: None,
        }
    }

    pub fn failure_with_code(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error_code: Some(code.into()),
            ..Self::failure(error)
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}
