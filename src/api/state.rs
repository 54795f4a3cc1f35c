//! Shared handler state.

use mockable::Clock;
use std::sync::Arc;

use crate::task::{
    ports::TaskRepository,
    services::{
        ChangeTaskStatusHandler, CreateTaskHandler, DeleteTaskHandler, GetTaskHandler,
        ListTasksHandler, TaskWriteGate, UpdateTaskHandler,
    },
};

/// Task handlers shared by every request.
pub struct TaskHandlers<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates tasks.
    pub create: CreateTaskHandler<R, C>,
    /// Replaces editable task fields.
    pub update: UpdateTaskHandler<R, C>,
    /// Changes task status.
    pub change_status: ChangeTaskStatusHandler<R, C>,
    /// Deletes tasks.
    pub delete: DeleteTaskHandler<R>,
    /// Lists active tasks.
    pub list: ListTasksHandler<R>,
    /// Looks up one task.
    pub get: GetTaskHandler<R>,
}

/// Application state handed to axum.
///
/// Clones share one set of handlers and one write gate.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    handlers: Arc<TaskHandlers<R, C>>,
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Wires every task handler to `repository` and `clock`.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        let gate = TaskWriteGate::new();
        let handlers = TaskHandlers {
            create: CreateTaskHandler::new(Arc::clone(&repository), Arc::clone(&clock)),
            update: UpdateTaskHandler::new(
                Arc::clone(&repository),
                Arc::clone(&clock),
                gate.clone(),
            ),
            change_status: ChangeTaskStatusHandler::new(
                Arc::clone(&repository),
                clock,
                gate.clone(),
            ),
            delete: DeleteTaskHandler::new(Arc::clone(&repository), gate),
            list: ListTasksHandler::new(Arc::clone(&repository)),
            get: GetTaskHandler::new(repository),
        };
        Self {
            handlers: Arc::new(handlers),
        }
    }

    /// Returns the shared handlers.
    #[must_use]
    pub fn handlers(&self) -> &TaskHandlers<R, C> {
        &self.handlers
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
        }
    }
}
