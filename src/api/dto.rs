//! Request and response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::task::domain::{Priority, Task};

/// Body accepted by task create and update endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Priority name.
    pub priority: String,
    /// Optional due date in RFC 3339 form.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

/// Body accepted by the status endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusPayload {
    /// Target status name.
    pub status: String,
}

/// Query string accepted by the list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListTasksParams {
    /// Optional exact status filter.
    pub status: Option<String>,
}

/// Task representation returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: Uuid,
    /// Task title.
    pub title: String,
    /// Task description, empty when unset.
    pub description: String,
    /// Priority name.
    pub priority: Priority,
    /// Status name.
    pub status: &'static str,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Whether the task is done.
    pub is_completed: bool,
    /// Completion instant while done.
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Last modification instant.
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().into_inner(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            priority: task.priority(),
            status: task.status().as_str(),
            due_date: task.due_date(),
            is_completed: task.is_completed(),
            completed_at: task.completed_at(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    /// Always `Healthy` while the server answers.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
}

/// RFC 9457 problem details body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemDetails {
    /// Problem type reference.
    #[serde(rename = "type")]
    pub problem_type: &'static str,
    /// Short summary of the problem type.
    pub title: &'static str,
    /// HTTP status code.
    pub status: u16,
    /// Explanation specific to this occurrence.
    pub detail: String,
}
