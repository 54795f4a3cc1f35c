//! API errors rendered as problem details.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::dto::ProblemDetails;
use crate::task::services::TaskServiceError;

const PROBLEM_JSON: &str = "application/problem+json";
const INTERNAL_DETAIL: &str = "An unexpected error occurred";

/// Errors returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was malformed or failed validation.
    #[error("{0}")]
    Validation(String),

    /// The addressed resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// An unexpected failure; the message is only logged.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Builds a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Builds a not-found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Builds an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the problem details body sent to clients.
    #[must_use]
    pub fn problem(&self) -> ProblemDetails {
        let (problem_type, title, detail) = match self {
            Self::Validation(message) => (
                "https://tools.ietf.org/html/rfc9110#section-15.5.1",
                "Validation Error",
                message.clone(),
            ),
            Self::NotFound(message) => (
                "https://tools.ietf.org/html/rfc9110#section-15.5.5",
                "Not Found",
                message.clone(),
            ),
            Self::Internal(_) => (
                "https://tools.ietf.org/html/rfc9110#section-15.6.1",
                "Internal Server Error",
                INTERNAL_DETAIL.to_owned(),
            ),
        };
        ProblemDetails {
            problem_type,
            title,
            status: self.status_code().as_u16(),
            detail,
        }
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::NotFound(task_id) => {
                Self::not_found(format!("task {task_id} not found"))
            }
            validation if validation.is_validation() => Self::validation(validation.to_string()),
            other => Self::internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation(message) => tracing::warn!(detail = %message, "request rejected"),
            Self::NotFound(message) => tracing::warn!(detail = %message, "resource not found"),
            Self::Internal(message) => tracing::error!(error = %message, "request failed"),
        }

        let status = self.status_code();
        (
            status,
            [(header::CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON))],
            Json(self.problem()),
        )
            .into_response()
    }
}
