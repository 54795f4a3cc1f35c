//! Service-level errors shared by the task handlers.

use crate::task::{
    domain::{ParseTaskStatusError, TaskDomainError, TaskId},
    ports::TaskRepositoryError,
};
use thiserror::Error;

/// Service-level errors for task command and query handlers.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The `priority` field could not be parsed.
    #[error("invalid priority: {0}")]
    InvalidPriority(#[source] TaskDomainError),

    /// The `status` field could not be parsed.
    #[error("invalid status: {0}")]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The addressed task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskServiceError {
    /// Returns `true` for errors caused by invalid caller input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidPriority(_) | Self::InvalidStatus(_) | Self::Domain(_)
        )
    }
}

/// Result type for task handler operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;
