//! Change-status command and handler.

use super::{TaskServiceResult, TaskWriteGate};
use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::TaskRepository,
};
use mockable::Clock;
use std::sync::Arc;

/// Command payload moving a task to another status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeTaskStatusRequest {
    task_id: TaskId,
    status: String,
}

impl ChangeTaskStatusRequest {
    /// Creates a request with the target status name.
    #[must_use]
    pub fn new(task_id: TaskId, status: impl Into<String>) -> Self {
        Self {
            task_id,
            status: status.into(),
        }
    }
}

/// Handles [`ChangeTaskStatusRequest`] commands.
#[derive(Clone)]
pub struct ChangeTaskStatusHandler<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    gate: TaskWriteGate,
}

impl<R, C> ChangeTaskStatusHandler<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new change-status handler.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>, gate: TaskWriteGate) -> Self {
        Self {
            repository,
            clock,
            gate,
        }
    }

    /// Moves the task to the requested status.
    ///
    /// A `Done` target marks the task completed. Returns `Ok(None)` when no
    /// task has the requested identifier.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::InvalidStatus`] for an unknown
    /// status name, or [`super::TaskServiceError::Repository`] when
    /// persistence fails.
    pub async fn handle(
        &self,
        request: ChangeTaskStatusRequest,
    ) -> TaskServiceResult<Option<Task>> {
        let task_id = request.task_id;
        let status = TaskStatus::try_from(request.status.as_str()).inspect_err(|err| {
            tracing::warn!(%task_id, error = %err, "rejected task status");
        })?;

        let _guard = self.gate.acquire().await;
        let Some(mut task) = self.repository.find_by_id(task_id).await? else {
            tracing::warn!(%task_id, "task not found for status change");
            return Ok(None);
        };

        let previous = task.status();
        if status == TaskStatus::Done {
            task.mark_completed(&*self.clock);
        } else {
            task.update_status(status, &*self.clock);
        }
        self.repository.save(&task).await?;

        tracing::info!(%task_id, from = %previous, to = %status, "task status changed");
        Ok(Some(task))
    }
}
