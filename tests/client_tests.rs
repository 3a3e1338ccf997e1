//! Tests funcionales del cliente mock y el selector
//!
//! Cubre el contrato completo a través del trait object que entrega el
//! selector, tal como lo consumen las herramientas.

use pulse::client::{create_client, ClientKind, TaskManagerClient};
use pulse::config::ClientConfig;
use pulse::models::{TaskStatus, TaskUpdate};
use serde_json::Map;
use std::sync::Arc;

fn mock_config() -> ClientConfig {
    ClientConfig {
        use_mock: true,
        ..ClientConfig::default()
    }
}

fn update_with_session(session_id: &str, progress: f64) -> TaskUpdate {
    TaskUpdate::new(
        session_id,
        "PROJ-1",
        TaskStatus::Running,
        "build",
        "started",
        progress,
        Map::new(),
    )
}

#[tokio::test]
async fn test_selector_identities() {
    assert_eq!(
        create_client(&ClientConfig::default()).kind(),
        ClientKind::Http
    );
    assert_eq!(create_client(&mock_config()).kind(), ClientKind::Mock);
}

#[tokio::test]
async fn test_update_then_lookup_by_both_identifiers() {
    let client: Arc<dyn TaskManagerClient> = create_client(&mock_config());

    let result = client
        .update_task("T1", &update_with_session("S1", 50.0))
        .await;
    assert!(result.success);

    let by_task = client.get_task(Some("T1"), None).await;
    let by_session = client.get_task(None, Some("S1")).await;
    assert!(by_task.success);
    assert!(by_session.success);
    assert_eq!(by_task.data, by_session.data);

    let missing = client.get_task(Some("unknown"), None).await;
    assert!(!missing.success);
    assert_eq!(missing.error.as_deref(), Some("Task unknown not found"));
}

#[tokio::test]
async fn test_task_id_takes_precedence_over_session() {
    let client = create_client(&mock_config());

    client
        .update_task("T1", &update_with_session("S1", 10.0))
        .await;
    client
        .update_task("T2", &update_with_session("S2", 20.0))
        .await;

    // Both identifiers supplied, pointing at different tasks
    let result = client.get_task(Some("T1"), Some("S2")).await;
    assert!(result.success);
    assert_eq!(result.data.unwrap()["task_id"], "T1");
}

#[tokio::test]
async fn test_history_shape() {
    let client = create_client(&mock_config());
    client
        .update_task("T1", &update_with_session("S1", 80.0))
        .await;

    let result = client.get_task_history("T1", 100, 0).await;
    assert!(result.success);
    let data = result.data.unwrap();

    let history = data["status_history"].as_array().unwrap();
    assert!(!history.is_empty());
    // Latest entry reflects the stored snapshot
    let last = history.last().unwrap();
    assert_eq!(last["progress_percentage"], 80.0);

    let logs = data["logs"].as_array().unwrap();
    assert!(!logs.is_empty());

    let missing = client.get_task_history("unknown", 100, 0).await;
    assert!(!missing.success);
}

#[tokio::test]
async fn test_mock_health_reports_mode_and_counts() {
    let client = create_client(&mock_config());
    client
        .update_task("T1", &update_with_session("S1", 0.0))
        .await;

    let result = client.health_check().await;
    assert!(result.success);
    assert!(result.message.unwrap().contains("(mock)"));
    let data = result.data.unwrap();
    assert_eq!(data["type"], "mock");
    assert_eq!(data["tasks_count"], 1);
    assert_eq!(data["sessions_count"], 1);
}

#[tokio::test]
async fn test_out_of_range_progress_is_stored_clamped() {
    let client = create_client(&mock_config());

    client
        .update_task("T1", &update_with_session("S1", 150.0))
        .await;

    let result = client.get_task(None, Some("S1")).await;
    assert!(result.success);
    assert_eq!(result.data.unwrap()["progress_percentage"], 100.0);

    client
        .update_task("T1", &update_with_session("S1", -30.0))
        .await;
    let result = client.get_task(None, Some("S1")).await;
    assert_eq!(result.data.unwrap()["progress_percentage"], 0.0);
}

#[tokio::test]
async fn test_upsert_overwrites_previous_snapshot() {
    let client = create_client(&mock_config());

    client
        .update_task("T1", &update_with_session("S1", 10.0))
        .await;
    let second = TaskUpdate::new(
        "S1",
        "PROJ-1",
        TaskStatus::Success,
        "deploy",
        "all done",
        100.0,
        Map::new(),
    );
    client.update_task("T1", &second).await;

    let result = client.get_task(Some("T1"), None).await;
    let data = result.data.unwrap();
    assert_eq!(data["status"], "success");
    assert_eq!(data["current_action"], "deploy");
}
