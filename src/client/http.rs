//! HTTP implementation of the Task Manager client
//!
//! Every operation follows the same shape: build the URL and payload, issue
//! the request, then classify the outcome into exactly one of success, 404,
//! bad status, timeout, connection failure, or unexpected fault. Each failure
//! mode carries its own message template so callers can assert on the kind
//! of failure, not just the boolean flag.

use super::{ClientFuture, ClientKind, TaskManagerClient};
use crate::config::ClientConfig;
use crate::models::{OperationResult, TaskUpdate};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;

/// Health probes use a short fixed timeout so a slow service does not block
/// diagnostics for the full operational timeout.
const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

pub struct HttpTaskManagerClient {
    config: ClientConfig,
    base_url: String,
    client: Client,
}

impl HttpTaskManagerClient {
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            .user_agent(format!("pulse/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        let base_url = config.base_url();
        Self {
            config,
            base_url,
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request and normalize the outcome. `timeout` is applied per
    /// request so the health check's shorter limit never leaks into other
    /// calls. `not_found` is the message used for a 404 response.
    async fn execute(
        &self,
        request: RequestBuilder,
        timeout: Duration,
        not_found: &str,
    ) -> OperationResult {
        let response = match request.timeout(timeout).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                return OperationResult::failure(format!(
                    "API call timeout (>{}s)",
                    timeout.as_secs()
                ));
            }
            Err(e) if e.is_connect() => {
                return OperationResult::failure(format!(
                    "Cannot connect to Task Manager ({})",
                    self.base_url
                ));
            }
            Err(e) => {
                return OperationResult::failure(format!("API call error: {}", e));
            }
        };

        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            return OperationResult::ok();
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return OperationResult::failure(format!("API call error: {}", e));
            }
        };

        if status.is_success() {
            if body.is_empty() {
                return OperationResult::ok();
            }
            return match serde_json::from_str::<Value>(&body) {
                Ok(payload) => OperationResult::ok_with_data(payload),
                Err(e) => {
                    OperationResult::failure(format!("API call error: invalid response body: {}", e))
                }
            };
        }

        // Structured error bodies carry `error` and optionally `error_code`
        let parsed_error = serde_json::from_str::<Value>(&body).ok();
        let error_code = parsed_error
            .as_ref()
            .and_then(|v| v.get("error_code"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        if status == StatusCode::NOT_FOUND {
            let result = OperationResult::failure(not_found);
            return match error_code {
                Some(code) => OperationResult {
                    error_code: Some(code),
                    ..result
                },
                None => result,
            };
        }

        let detail = parsed_error
            .as_ref()
            .and_then(|v| v.get("error"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .unwrap_or(body);

        let message = format!("API call failed: {} - {}", status.as_u16(), detail);
        match error_code {
            Some(code) => OperationResult::failure_with_code(message, code),
            None => OperationResult::failure(message),
        }
    }

    fn operational_timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_secs)
    }
}

impl TaskManagerClient for HttpTaskManagerClient {
    fn update_task<'a>(&'a self, task_id: &'a str, update: &'a TaskUpdate) -> ClientFuture<'a> {
        Box::pin(async move {
            if task_id.is_empty() {
                return OperationResult::failure("task_id must not be empty");
            }

            let url = format!("{}/api/tasks", self.base_url);
            let request = self
                .client
                .post(&url)
                .query(&[("task_id", task_id)])
                .json(&update.to_value(task_id));

            let result = self
                .execute(
                    request,
                    self.operational_timeout(),
                    &format!("Task {} not found", task_id),
                )
                .await;

            if result.success {
                OperationResult {
                    message: Some("Task status updated successfully".to_string()),
                    ..result
                }
            } else {
                result
            }
        })
    }

    fn get_task<'a>(
        &'a self,
        task_id: Option<&'a str>,
        session_id: Option<&'a str>,
    ) -> ClientFuture<'a> {
        Box::pin(async move {
            let url = format!("{}/api/tasks", self.base_url);

            let mut query: Vec<(&str, &str)> = Vec::new();
            if let Some(id) = task_id {
                query.push(("task_id", id));
            }
            if let Some(id) = session_id {
                query.push(("session_id", id));
            }

            // task_id takes precedence in the not-found message too
            let (kind, identifier) = match (task_id, session_id) {
                (Some(id), _) => ("Task", id),
                (None, Some(id)) => ("Session", id),
                (None, None) => ("Task", ""),
            };

            let request = self.client.get(&url).query(&query);
            self.execute(
                request,
                self.operational_timeout(),
                &format!("{} {} not found", kind, identifier),
            )
            .await
        })
    }

    fn get_task_history<'a>(
        &'a self,
        task_id: &'a str,
        limit: u32,
        offset: u32,
    ) -> ClientFuture<'a> {
        Box::pin(async move {
            let url = format!("{}/api/tasks/history", self.base_url);
            let request = self.client.get(&url).query(&[
                ("task_id", task_id.to_string()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ]);

            self.execute(
                request,
                self.operational_timeout(),
                &format!("Task {} not found", task_id),
            )
            .await
        })
    }

    fn health_check(&self) -> ClientFuture<'_> {
        Box::pin(async move {
            let url = format!("{}/api/health", self.base_url);
            let request = self.client.get(&url);

            let result = self
                .execute(request, HEALTH_CHECK_TIMEOUT, "Health endpoint not found")
                .await;

            if !result.success {
                return result;
            }

            OperationResult::ok_with_message("Task Manager service is healthy").with_data(json!({
                "host": self.config.host,
                "port": self.config.port,
                "base_url": self.base_url,
                "timeout_secs": self.config.timeout_secs,
                "service": result.data,
            }))
        })
    }

    fn kind(&self) -> ClientKind {
        ClientKind::Http
    }
}
