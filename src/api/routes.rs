//! Route table for the task API.

use axum::Router;
use axum::routing::{get, post, put};
use mockable::Clock;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;
use crate::task::ports::TaskRepository;

/// Builds the router serving every task endpoint.
///
/// Requests are traced through `tower-http`'s [`TraceLayer`].
pub fn create_router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/tasks",
            post(handlers::create_task::<R, C>).get(handlers::list_tasks::<R, C>),
        )
        .route(
            "/tasks/{id}",
            get(handlers::get_task::<R, C>)
                .put(handlers::update_task::<R, C>)
                .delete(handlers::delete_task::<R, C>),
        )
        .route(
            "/tasks/{id}/status",
            put(handlers::change_task_status::<R, C>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
