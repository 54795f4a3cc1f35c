//! HTTP API for task management.
//!
//! [`routes::create_router`] wires the task handlers held in
//! [`state::AppState`] to axum routes. [`server::Server`] binds a listener
//! and serves the router until a shutdown signal arrives.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use server::{Server, ServerConfig};
pub use state::AppState;
