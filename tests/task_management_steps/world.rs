//! Shared world state for task management BDD scenarios.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use mockable::DefaultClock;
use rstest::fixture;
use serde_json::Value;
use taskmanager::api::{AppState, create_router};
use taskmanager::task::adapters::memory::InMemoryTaskRepository;
use tower::ServiceExt;

/// Scenario world driving the HTTP router.
pub struct TaskManagementWorld {
    pub router: Router,
    pub current_task_id: Option<String>,
    pub last_status: Option<StatusCode>,
    pub last_body: Value,
}

impl TaskManagementWorld {
    /// Creates a world backed by an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        let state = AppState::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        );
        Self {
            router: create_router(state),
            current_task_id: None,
            last_status: None,
            last_body: Value::Null,
        }
    }

    /// Sends a request and records the response status and JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be built or the body is not
    /// JSON.
    pub fn send(&mut self, method: &str, uri: &str, body: Option<&Value>) -> eyre::Result<()> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))?,
            None => builder.body(Body::empty())?,
        };

        let response = run_async(self.router.clone().oneshot(request))?;
        self.last_status = Some(response.status());
        let bytes = run_async(response.into_body().collect())?.to_bytes();
        self.last_body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok(())
    }

    /// Returns the identifier of the task the scenario is working on.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task_id(&self) -> eyre::Result<String> {
        self.current_task_id
            .clone()
            .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))
    }

    /// Returns a string field of the last response body.
    ///
    /// # Errors
    ///
    /// Returns an error when the field is absent or not a string.
    pub fn body_str(&self, field: &str) -> eyre::Result<&str> {
        self.last_body
            .get(field)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                eyre::eyre!("response body has no string field {field}: {}", self.last_body)
            })
    }
}

impl Default for TaskManagementWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskManagementWorld {
    TaskManagementWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
