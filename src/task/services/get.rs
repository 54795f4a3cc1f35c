//! Single-task lookup.

use super::TaskServiceResult;
use crate::task::{
    domain::{Task, TaskId},
    ports::TaskRepository,
};
use std::sync::Arc;

/// Handles lookups of one task by identifier.
#[derive(Clone)]
pub struct GetTaskHandler<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> GetTaskHandler<R>
where
    R: TaskRepository,
{
    /// Creates a new get-task handler.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the task, or `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] when the lookup fails.
    pub async fn handle(&self, task_id: TaskId) -> TaskServiceResult<Option<Task>> {
        Ok(self.repository.find_by_id(task_id).await?)
    }
}
