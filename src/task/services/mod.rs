//! Application services for task lifecycle orchestration.
//!
//! Each use case has its own handler. Handlers receive their repository,
//! clock, and [`TaskWriteGate`] through their constructors.

mod create;
mod delete;
mod error;
mod gate;
mod get;
mod list;
mod status;
mod update;

pub use create::{CreateTaskHandler, CreateTaskRequest};
pub use delete::DeleteTaskHandler;
pub use error::{TaskServiceError, TaskServiceResult};
pub use gate::TaskWriteGate;
pub use get::GetTaskHandler;
pub use list::{ListTasksHandler, ListTasksQuery};
pub use status::{ChangeTaskStatusHandler, ChangeTaskStatusRequest};
pub use update::{UpdateTaskHandler, UpdateTaskRequest};
