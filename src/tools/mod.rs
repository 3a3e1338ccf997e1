//! Módulo de Herramientas - acciones invocables por el agente
//!
//! Cada herramienta envuelve una operación del cliente Task Manager y
//! devuelve siempre un [`OperationResult`](crate::models::OperationResult):
//! nunca propaga un error a través de la superficie de herramientas.
//!
//! - [`status`] - Reportar el estado de una tarea (update_task)
//! - [`query`] - Consultar estado e historial (get_task, get_task_history)
//! - [`health`] - Verificar la salud del servicio (health_check)
//! - [`registry`] - Registro de herramientas compartido

mod health;
mod query;
pub mod registry;
mod status;

pub use health::{HealthCheckArgs, HealthCheckTool};
pub use query::{GetTaskArgs, GetTaskHistoryArgs, GetTaskHistoryTool, GetTaskTool};
pub use registry::ToolRegistry;
pub use status::{UpdateTaskArgs, UpdateTaskTool};

use crate::client::TaskManagerClient;
use crate::models::OperationResult;

/// Resolve the task associated with a session, failing fast with a
/// descriptive result when the session has no task yet.
pub(crate) async fn resolve_task_id(
    client: &dyn TaskManagerClient,
    session_id: &str,
) -> Result<String, OperationResult> {
    let result = client.get_task(None, Some(session_id)).await;

    if !result.success {
        return Err(OperationResult::failure(format!(
            "No task associated with session {}",
            session_id
        )));
    }

    result
        .data
        .as_ref()
        .and_then(|data| data.get("task_id"))
        .and_then(|id| id.as_str())
        .map(|id| id.to_string())
        .ok_or_else(|| {
            OperationResult::failure(format!(
                "No task associated with session {}",
                session_id
            ))
        })
}
