//! Taskmanager: a task-tracking service.
//!
//! The crate exposes task creation, editing, status changes, deletion and
//! listing over an HTTP API, together with the supporting notification and
//! text-processing components.
//!
//! # Architecture
//!
//! Taskmanager follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store, files)
//!
//! # Modules
//!
//! - [`task`]: Task aggregate, repository port and command/query handlers
//! - [`api`]: HTTP routes, request/response mapping and the server loop
//! - [`config`]: Environment-driven runtime configuration
//! - [`notification`]: Email and SMS notification dispatch
//! - [`processing`]: Task text transformations and output persistence

pub mod api;
pub mod config;
pub mod notification;
pub mod processing;
pub mod task;
