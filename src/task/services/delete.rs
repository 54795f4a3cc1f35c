//! Delete-task command handler.

use super::{TaskServiceError, TaskServiceResult, TaskWriteGate};
use crate::task::{domain::TaskId, ports::TaskRepository};
use std::sync::Arc;

/// Handles task deletion.
#[derive(Clone)]
pub struct DeleteTaskHandler<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
    gate: TaskWriteGate,
}

impl<R> DeleteTaskHandler<R>
where
    R: TaskRepository,
{
    /// Creates a new delete-task handler.
    #[must_use]
    pub const fn new(repository: Arc<R>, gate: TaskWriteGate) -> Self {
        Self { repository, gate }
    }

    /// Removes the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no such task exists, or
    /// [`TaskServiceError::Repository`] when removal fails.
    pub async fn handle(&self, task_id: TaskId) -> TaskServiceResult<()> {
        tracing::info!(%task_id, "deleting task");

        let _guard = self.gate.acquire().await;
        if !self.repository.remove(task_id).await? {
            tracing::warn!(%task_id, "task not found for deletion");
            return Err(TaskServiceError::NotFound(task_id));
        }

        tracing::info!(%task_id, "task deleted");
        Ok(())
    }
}
