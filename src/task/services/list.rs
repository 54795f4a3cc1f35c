//! List-tasks query and handler.

use super::TaskServiceResult;
use crate::task::{
    domain::{Task, TaskStatus},
    ports::TaskRepository,
};
use std::cmp::Reverse;
use std::sync::Arc;

/// Query for active tasks, optionally narrowed to one status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListTasksQuery {
    status: Option<TaskStatus>,
}

impl ListTasksQuery {
    /// Creates an unfiltered query.
    #[must_use]
    pub const fn new() -> Self {
        Self { status: None }
    }

    /// Keeps only tasks with exactly this status.
    #[must_use]
    pub const fn with_status(mut self, status: Option<TaskStatus>) -> Self {
        self.status = status;
        self
    }
}

/// Handles [`ListTasksQuery`] queries.
#[derive(Clone)]
pub struct ListTasksHandler<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> ListTasksHandler<R>
where
    R: TaskRepository,
{
    /// Creates a new list-tasks handler.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns active tasks, newest first.
    ///
    /// Done and Cancelled tasks never appear, even when the query filters on
    /// one of those statuses.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] when the lookup fails.
    pub async fn handle(&self, query: ListTasksQuery) -> TaskServiceResult<Vec<Task>> {
        let mut tasks = self.repository.list_active().await?;
        if let Some(status) = query.status {
            tasks.retain(|task| task.status() == status);
        }
        tasks.sort_by_key(|task| Reverse(task.created_at()));

        tracing::info!(
            status = query.status.map_or("none", TaskStatus::as_str),
            count = tasks.len(),
            "listed tasks"
        );
        Ok(tasks)
    }
}
