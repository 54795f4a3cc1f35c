//! Error types for task domain validation and parsing.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty or whitespace only.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the maximum length.
    #[error("title must be at most {max} characters, got {actual}")]
    TitleTooLong {
        /// Maximum permitted character count.
        max: usize,
        /// Character count of the rejected title.
        actual: usize,
    },

    /// The task description exceeds the maximum length.
    #[error("description must be at most {max} characters, got {actual}")]
    DescriptionTooLong {
        /// Maximum permitted character count.
        max: usize,
        /// Character count of the rejected description.
        actual: usize,
    },

    /// The due date is not strictly after the current time.
    #[error("due date {due_date} must be later than {now}")]
    DueDateNotInFuture {
        /// Rejected due date.
        due_date: DateTime<Utc>,
        /// Clock reading the due date was checked against.
        now: DateTime<Utc>,
    },

    /// The priority name is blank or unknown.
    #[error("invalid priority name '{0}', expected one of Low, Medium, High, Critical")]
    InvalidPriorityName(String),

    /// The priority ordinal is outside `1..=4`.
    #[error("invalid priority ordinal {0}, expected a value between 1 and 4")]
    InvalidPriorityOrdinal(i64),
}

/// Error returned while parsing task statuses from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status '{0}', expected one of Todo, InProgress, Done, Cancelled")]
pub struct ParseTaskStatusError(pub String);
