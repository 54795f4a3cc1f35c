//! Domain model for task lifecycle management.
//!
//! The task domain models task creation, detail and scheduling updates, and
//! status changes while keeping all infrastructure concerns outside of the
//! domain boundary.

mod error;
mod ids;
mod priority;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use priority::Priority;
pub use task::{
    MAX_DESCRIPTION_CHARS, MAX_TITLE_CHARS, NewTask, PersistedTaskData, Task, TaskStatus,
};
