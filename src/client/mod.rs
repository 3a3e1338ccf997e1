//! Task Manager client abstraction
//!
//! Two interchangeable implementations fulfil the same contract:
//! - [`HttpTaskManagerClient`] talks to the remote Task Manager service
//! - [`MockTaskManagerClient`] keeps everything in memory for tests
//!
//! Every operation returns an [`OperationResult`](crate::models::OperationResult);
//! no implementation raises an error through the trait boundary.

use crate::config::ClientConfig;
use crate::models::{OperationResult, TaskUpdate};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub mod http;
pub mod mock;

pub use http::HttpTaskManagerClient;
pub use mock::MockTaskManagerClient;

/// Which backing implementation a client instance is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    Http,
    Mock,
}

impl std::fmt::Display for ClientKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http => write!(f, "http"),
            Self::Mock => write!(f, "mock"),
        }
    }
}

/// Boxed future returned by every client operation. The `Sync` bound is
/// required because rig's `Tool::call` futures must be `Sync`, and they
/// await these futures directly.
pub type ClientFuture<'a> = Pin<Box<dyn Future<Output = OperationResult> + Send + Sync + 'a>>;

/// Task Manager client contract
pub trait TaskManagerClient: Send + Sync {
    /// Upsert the task identified by `task_id` with a new status snapshot.
    /// The backing store appends a history record for the change.
    fn update_task<'a>(&'a self, task_id: &'a str, update: &'a TaskUpdate) -> ClientFuture<'a>;

    /// Look up a task by either identifier. `task_id` takes precedence when
    /// both are supplied; callers must supply at least one usable identifier.
    fn get_task<'a>(
        &'a self,
        task_id: Option<&'a str>,
        session_id: Option<&'a str>,
    ) -> ClientFuture<'a>;

    /// Paginated view of status-change and log records for a task
    fn get_task_history<'a>(&'a self, task_id: &'a str, limit: u32, offset: u32)
        -> ClientFuture<'a>;

    /// Reachability of the backing store plus the effective configuration
    fn health_check(&self) -> ClientFuture<'_>;

    /// Identify the backing implementation
    fn kind(&self) -> ClientKind;
}

/// Create a Task Manager client from configuration: the in-memory mock when
/// `use_mock` is set, the HTTP client otherwise. Each call constructs a fresh
/// instance; sharing one across calls is up to the caller.
pub fn create_client(config: &ClientConfig) -> Arc<dyn TaskManagerClient> {
    if config.use_mock {
        tracing::debug!("Creating mock Task Manager client");
        Arc::new(MockTaskManagerClient::new())
    } else {
        tracing::debug!("Creating HTTP Task Manager client for {}", config.base_url());
        Arc::new(HttpTaskManagerClient::new(config.clone()))
    }
}
