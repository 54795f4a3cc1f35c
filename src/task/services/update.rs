//! Update-task command and handler.

use super::{TaskServiceError, TaskServiceResult, TaskWriteGate};
use crate::task::{
    domain::{Priority, Task, TaskId},
    ports::TaskRepository,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;

/// Command payload replacing the editable fields of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    task_id: TaskId,
    title: String,
    description: Option<String>,
    priority: String,
    due_date: Option<DateTime<Utc>>,
}

impl UpdateTaskRequest {
    /// Creates a request with the required fields.
    ///
    /// Description and due date default to cleared.
    #[must_use]
    pub fn new(task_id: TaskId, title: impl Into<String>, priority: impl Into<String>) -> Self {
        Self {
            task_id,
            title: title.into(),
            description: None,
            priority: priority.into(),
            due_date: None,
        }
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the replacement due date; `None` clears it.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = due_date;
        self
    }
}

/// Handles [`UpdateTaskRequest`] commands.
#[derive(Clone)]
pub struct UpdateTaskHandler<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    gate: TaskWriteGate,
}

impl<R, C> UpdateTaskHandler<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new update-task handler.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>, gate: TaskWriteGate) -> Self {
        Self {
            repository,
            clock,
            gate,
        }
    }

    /// Applies details, priority, and due date to an existing task.
    ///
    /// Returns `Ok(None)` when no task has the requested identifier. Nothing
    /// is persisted unless every update succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidPriority`] for an unknown priority
    /// name, [`TaskServiceError::Domain`] when validation fails, or
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn handle(&self, request: UpdateTaskRequest) -> TaskServiceResult<Option<Task>> {
        tracing::info!(
            task_id = %request.task_id,
            title = %request.title,
            priority = %request.priority,
            "updating task"
        );

        let _guard = self.gate.acquire().await;
        let task_id = request.task_id;
        let Some(mut task) = self.repository.find_by_id(task_id).await? else {
            tracing::warn!(%task_id, "task not found for update");
            return Ok(None);
        };

        apply_update(&mut task, request, &*self.clock).inspect_err(|err| {
            tracing::warn!(%task_id, error = %err, "task update rejected");
        })?;
        self.repository.save(&task).await?;

        tracing::info!(
            task_id = %task.id(),
            priority = %task.priority(),
            due_date = ?task.due_date(),
            "task updated"
        );
        Ok(Some(task))
    }
}

fn apply_update(
    task: &mut Task,
    request: UpdateTaskRequest,
    clock: &impl Clock,
) -> TaskServiceResult<()> {
    let priority =
        Priority::from_name(&request.priority).map_err(TaskServiceError::InvalidPriority)?;
    task.update_details(&request.title, request.description, clock)?;
    task.update_priority(priority, clock);
    task.update_due_date(request.due_date, clock)?;
    Ok(())
}
