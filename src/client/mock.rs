//! In-memory implementation of the Task Manager client
//!
//! Test-only stand-in for the remote service. State is two maps that live
//! for the process lifetime and are never evicted: task_id to the latest
//! snapshot, and session_id to task_id so session lookups resolve.

use super::{ClientFuture, ClientKind, TaskManagerClient};
use crate::models::{OperationResult, TaskUpdate};
use serde_json::{json, Value};
use std::collections::HashMap;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct MockTaskManagerClient {
    tasks: Mutex<HashMap<String, Value>>,
    sessions: Mutex<HashMap<String, String>>,
}

impl MockTaskManagerClient {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskManagerClient for MockTaskManagerClient {
    fn update_task<'a>(&'a self, task_id: &'a str, update: &'a TaskUpdate) -> ClientFuture<'a> {
        Box::pin(async move {
            if task_id.is_empty() {
                return OperationResult::failure("task_id must not be empty");
            }

            let snapshot = update.to_value(task_id);

            self.tasks
                .lock()
                .await
                .insert(task_id.to_string(), snapshot.clone());
            self.sessions
                .lock()
                .await
                .insert(update.session_id.clone(), task_id.to_string());

            OperationResult::ok_with_message("Task status updated successfully (mock)")
                .with_data(snapshot)
        })
    }

    fn get_task<'a>(
        &'a self,
        task_id: Option<&'a str>,
        session_id: Option<&'a str>,
    ) -> ClientFuture<'a> {
        Box::pin(async move {
            let tasks = self.tasks.lock().await;

            if let Some(id) = task_id {
                if let Some(snapshot) = tasks.get(id) {
                    return OperationResult::ok_with_data(snapshot.clone());
                }
            }

            if let Some(id) = session_id {
                let sessions = self.sessions.lock().await;
                if let Some(snapshot) = sessions.get(id).and_then(|task_id| tasks.get(task_id)) {
                    return OperationResult::ok_with_data(snapshot.clone());
                }
            }

            let (kind, identifier) = match (task_id, session_id) {
                (Some(id), _) => ("Task", id),
                (None, Some(id)) => ("Session", id),
                (None, None) => ("Task", ""),
            };
            OperationResult::failure(format!("{} {} not found", kind, identifier))
        })
    }

    fn get_task_history<'a>(
        &'a self,
        task_id: &'a str,
        _limit: u32,
        _offset: u32,
    ) -> ClientFuture<'a> {
        Box::pin(async move {
            let tasks = self.tasks.lock().await;

            let Some(snapshot) = tasks.get(task_id) else {
                return OperationResult::failure(format!("Task {} not found", task_id));
            };

            // Minimal but structurally valid history: an initial record plus the
            // latest snapshot, and two illustrative log lines.
            let history = json!({
                "task_info": snapshot,
                "status_history": [
                    {
                        "id": 1,
                        "status": "running",
                        "current_action": "Started task",
                        "progress_percentage": 0,
                        "message": "Task initialized",
                        "created_at": snapshot["timestamp"],
                    },
                    {
                        "id": 2,
                        "status": snapshot["status"],
                        "current_action": snapshot["current_action"],
                        "progress_percentage": snapshot["progress_percentage"],
                        "message": snapshot["message"],
                        "created_at": snapshot["timestamp"],
                    },
                ],
                "logs": [
                    {
                        "id": 1,
                        "log_level": "INFO",
                        "log_message": "Task started successfully",
                        "created_at": snapshot["timestamp"],
                    },
                    {
                        "id": 2,
                        "log_level": "INFO",
                        "log_message": "Task processing in progress",
                        "created_at": snapshot["timestamp"],
                    },
                ],
            });

            OperationResult::ok_with_data(history)
            })
    }

    fn health_check(&self) -> ClientFuture<'_> {
        Box::pin(async move {
            let tasks_count = self.tasks.lock().await.len();
            let sessions_count = self.sessions.lock().await.len();

            OperationResult::ok_with_message("Task Manager service is healthy (mock)").with_data(
                json!({
                    "type": "mock",
                    "tasks_count": tasks_count,
                    "sessions_count": sessions_count,
                }),
            )
        })
    }

    fn kind(&self) -> ClientKind {
        ClientKind::Mock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;
    use serde_json::Map;

    fn sample_update(session_id: &str) -> TaskUpdate {
        TaskUpdate::new(
            session_id,
            "PROJ-7",
            TaskStatus::Running,
            "compiling",
            "in progress",
            40.0,
            Map::new(),
        )
    }

    #[tokio::test]
    async fn test_upsert_then_lookup_by_both_identifiers() {
        let client = MockTaskManagerClient::new();
        let result = client.update_task("T1", &sample_update("S1")).await;
        assert!(result.success);

        let by_task = client.get_task(Some("T1"), None).await;
        assert!(by_task.success);
        let by_session = client.get_task(None, Some("S1")).await;
        assert!(by_session.success);
        assert_eq!(by_task.data, by_session.data);
    }

    #[tokio::test]
    async fn test_unknown_task_is_not_found() {
        let client = MockTaskManagerClient::new();
        let result = client.get_task(Some("missing"), None).await;
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Task missing not found"));
    }

    #[tokio::test]
    async fn test_history_has_entries_after_update() {
        let client = MockTaskManagerClient::new();
        client.update_task("T1", &sample_update("S1")).await;

        let result = client.get_task_history("T1", 100, 0).await;
        assert!(result.success);
        let data = result.data.unwrap();
        assert!(!data["status_history"].as_array().unwrap().is_empty());
        assert!(!data["logs"].as_array().unwrap().is_empty());

        let missing = client.get_task_history("nope", 100, 0).await;
        assert!(!missing.success);
    }

    #[tokio::test]
    async fn test_health_reports_record_counts() {
        let client = MockTaskManagerClient::new();
        client.update_task("T1", &sample_update("S1")).await;

        let result = client.health_check().await;
        assert!(result.success);
        let data = result.data.unwrap();
        assert_eq!(data["type"], "mock");
        assert_eq!(data["tasks_count"], 1);
        assert_eq!(data["sessions_count"], 1);
    }
}
