//! Task aggregate root and related task lifecycle types.

use super::{ParseTaskStatusError, Priority, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of characters in a task title.
pub const MAX_TITLE_CHARS: usize = 200;

/// Maximum number of characters in a task description.
pub const MAX_DESCRIPTION_CHARS: usize = 2000;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    Todo,
    /// Task is being worked on.
    InProgress,
    /// Task has been completed.
    Done,
    /// Task has been abandoned.
    Cancelled,
}

impl TaskStatus {
    /// Returns the canonical display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::InProgress => "InProgress",
            Self::Done => "Done",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Returns `true` unless the status is `Done` or `Cancelled`.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Done | Self::Cancelled)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "inprogress" | "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for [`Task::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: Option<String>,
    priority: Option<Priority>,
    due_date: Option<DateTime<Utc>>,
}

impl NewTask {
    /// Starts a draft with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
            due_date: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task priority. Defaults to [`Priority::Medium`] when unset.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the task due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    priority: Priority,
    due_date: Option<DateTime<Utc>>,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new task in the `Todo` status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the title is blank or too long, the
    /// description is too long, or the due date is not after the current
    /// clock time.
    pub fn create(draft: NewTask, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let timestamp = clock.utc();
        let title = validate_title(&draft.title)?;
        let description = validate_description(draft.description.unwrap_or_default())?;
        if let Some(due_date) = draft.due_date {
            ensure_future(due_date, timestamp)?;
        }

        Ok(Self {
            id: TaskId::new(),
            title,
            description,
            priority: draft.priority.unwrap_or_default(),
            due_date: draft.due_date,
            status: TaskStatus::Todo,
            created_at: timestamp,
            updated_at: timestamp,
            completed_at: None,
        })
    }

    /// Reconstructs a task from persisted storage without re-validation.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            priority: data.priority,
            due_date: data.due_date,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, empty when none was given.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns `true` when the task is `Done`.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.status, TaskStatus::Done)
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the completion timestamp while the task is `Done`.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Replaces title and description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] under the same title and description
    /// rules as [`Task::create`]. The task is unchanged on error.
    pub fn update_details(
        &mut self,
        title: &str,
        description: Option<String>,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let validated_title = validate_title(title)?;
        let validated_description = validate_description(description.unwrap_or_default())?;
        self.title = validated_title;
        self.description = validated_description;
        self.touch(clock);
        Ok(())
    }

    /// Replaces the priority.
    pub fn update_priority(&mut self, priority: Priority, clock: &impl Clock) {
        self.priority = priority;
        self.touch(clock);
    }

    /// Sets or clears the due date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DueDateNotInFuture`] when a due date is
    /// given that is not after the current clock time.
    pub fn update_due_date(
        &mut self,
        due_date: Option<DateTime<Utc>>,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let timestamp = clock.utc();
        if let Some(value) = due_date {
            ensure_future(value, timestamp)?;
        }
        self.due_date = due_date;
        self.updated_at = timestamp;
        Ok(())
    }

    /// Moves the task to `status` without a transition guard.
    ///
    /// Entering `Done` stamps `completed_at`; leaving `Done` clears it.
    pub fn update_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        let timestamp = clock.utc();
        match (self.status, status) {
            (TaskStatus::Done, TaskStatus::Done) => {}
            (_, TaskStatus::Done) => self.completed_at = Some(timestamp),
            _ => self.completed_at = None,
        }
        self.status = status;
        self.updated_at = timestamp;
    }

    /// Marks the task `Done`, refreshing `completed_at` on every call.
    pub fn mark_completed(&mut self, clock: &impl Clock) {
        let timestamp = clock.utc();
        self.status = TaskStatus::Done;
        self.completed_at = Some(timestamp);
        self.updated_at = timestamp;
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Titles are stored as given; whitespace only counts against blankness.
fn validate_title(title: &str) -> Result<String, TaskDomainError> {
    if title.trim().is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    let actual = title.chars().count();
    if actual > MAX_TITLE_CHARS {
        return Err(TaskDomainError::TitleTooLong {
            max: MAX_TITLE_CHARS,
            actual,
        });
    }
    Ok(title.to_owned())
}

fn validate_description(description: String) -> Result<String, TaskDomainError> {
    let actual = description.chars().count();
    if actual > MAX_DESCRIPTION_CHARS {
        return Err(TaskDomainError::DescriptionTooLong {
            max: MAX_DESCRIPTION_CHARS,
            actual,
        });
    }
    Ok(description)
}

fn ensure_future(due_date: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), TaskDomainError> {
    if due_date <= now {
        return Err(TaskDomainError::DueDateNotInFuture { due_date, now });
    }
    Ok(())
}
