//! Axum handlers translating HTTP requests into task commands and queries.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderName, StatusCode, header};
use mockable::Clock;

use super::dto::{HealthResponse, ListTasksParams, StatusPayload, TaskPayload, TaskResponse};
use super::error::ApiError;
use super::state::AppState;
use crate::task::{
    domain::{TaskId, TaskStatus},
    ports::TaskRepository,
    services::{ChangeTaskStatusRequest, CreateTaskRequest, ListTasksQuery, UpdateTaskRequest},
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Response for a newly created task.
pub type Created = (StatusCode, [(HeaderName, String); 1], Json<TaskResponse>);

/// `GET /health`.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Healthy",
        version: VERSION,
    })
}

/// `POST /tasks`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for malformed bodies or invalid fields.
pub async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<Created, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let request = CreateTaskRequest::new(body.title, body.priority)
        .with_optional_description(body.description)
        .with_due_date(body.due_date);

    let task = state.handlers().create.handle(request).await?;
    let location = format!("/tasks/{}", task.id());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TaskResponse::from(&task)),
    ))
}

/// `GET /tasks`, optionally filtered with `?status=`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for an unknown status name.
pub async fn list_tasks<R, C>(
    State(state): State<AppState<R, C>>,
    params: Result<Query<ListTasksParams>, QueryRejection>,
) -> Result<Json<Vec<TaskResponse>>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Query(query) = params?;
    let status = query
        .status
        .as_deref()
        .map(TaskStatus::try_from)
        .transpose()
        .map_err(|err| ApiError::validation(format!("invalid status: {err}")))?;

    let tasks = state
        .handlers()
        .list
        .handle(ListTasksQuery::new().with_status(status))
        .await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

/// `GET /tasks/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for a malformed id and
/// [`ApiError::NotFound`] when no such task exists.
pub async fn get_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = parse_task_id(&raw_id)?;
    let task = state
        .handlers()
        .get
        .handle(task_id)
        .await?
        .ok_or_else(|| task_not_found(task_id))?;
    Ok(Json(TaskResponse::from(&task)))
}

/// `PUT /tasks/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for malformed input and
/// [`ApiError::NotFound`] when no such task exists.
pub async fn update_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = parse_task_id(&raw_id)?;
    let Json(body) = payload?;
    let request = UpdateTaskRequest::new(task_id, body.title, body.priority)
        .with_description(body.description)
        .with_due_date(body.due_date);

    let task = state
        .handlers()
        .update
        .handle(request)
        .await?
        .ok_or_else(|| task_not_found(task_id))?;
    Ok(Json(TaskResponse::from(&task)))
}

/// `PUT /tasks/{id}/status`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for malformed input and
/// [`ApiError::NotFound`] when no such task exists.
pub async fn change_task_status<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<StatusPayload>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = parse_task_id(&raw_id)?;
    let Json(body) = payload?;

    let task = state
        .handlers()
        .change_status
        .handle(ChangeTaskStatusRequest::new(task_id, body.status))
        .await?
        .ok_or_else(|| task_not_found(task_id))?;
    Ok(Json(TaskResponse::from(&task)))
}

/// `DELETE /tasks/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for a malformed id and
/// [`ApiError::NotFound`] when no such task exists.
pub async fn delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = parse_task_id(&raw_id)?;
    state.handlers().delete.handle(task_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::validation(format!("invalid task id '{raw}'")))
}

fn task_not_found(task_id: TaskId) -> ApiError {
    ApiError::not_found(format!("task {task_id} not found"))
}
