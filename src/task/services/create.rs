//! Create-task command and handler.

use super::{TaskServiceError, TaskServiceResult};
use crate::task::{
    domain::{NewTask, Priority, Task},
    ports::TaskRepository,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;

/// Command payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    priority: String,
    due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title and priority name.
    #[must_use]
    pub fn new(title: impl Into<String>, priority: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: priority.into(),
            due_date: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets an optional task description.
    #[must_use]
    pub fn with_optional_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the task due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = due_date;
        self
    }
}

/// Handles [`CreateTaskRequest`] commands.
#[derive(Clone)]
pub struct CreateTaskHandler<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> CreateTaskHandler<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new create-task handler.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Validates the request, creates the task, and stores it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidPriority`] for an unknown priority
    /// name, [`TaskServiceError::Domain`] when task validation fails, or
    /// [`TaskServiceError::Repository`] when the store rejects the task.
    pub async fn handle(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        tracing::info!(
            title = %request.title,
            priority = %request.priority,
            "creating task"
        );

        let priority = Priority::from_name(&request.priority).map_err(|err| {
            tracing::warn!(priority = %request.priority, "rejected task priority");
            TaskServiceError::InvalidPriority(err)
        })?;

        let mut draft = NewTask::new(request.title).with_priority(priority);
        if let Some(description) = request.description {
            draft = draft.with_description(description);
        }
        if let Some(due_date) = request.due_date {
            draft = draft.with_due_date(due_date);
        }

        let task = Task::create(draft, &*self.clock).inspect_err(|err| {
            tracing::warn!(error = %err, "task validation failed");
        })?;
        self.repository.add(&task).await?;

        tracing::info!(
            task_id = %task.id(),
            priority = %task.priority(),
            due_date = ?task.due_date(),
            "task created"
        );
        Ok(task)
    }
}
