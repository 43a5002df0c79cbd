//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the TaskDeck
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, ensuring a consistent error envelope across the
//! entire API.
//!
//! Store and infrastructure failures are logged with full detail server-side
//! and surface externally as a generic message only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use taskdeck_core::errors::TaskError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `TaskError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and `{ "error": ... }` JSON payloads.
#[derive(Debug)]
pub struct AppError(pub TaskError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            TaskError::NotFound(_) => StatusCode::NOT_FOUND,
            TaskError::Validation(_) => StatusCode::BAD_REQUEST,
            TaskError::Authentication(_) => StatusCode::UNAUTHORIZED,
            TaskError::Authorization(_) => StatusCode::FORBIDDEN,
            TaskError::Conflict(_) => StatusCode::CONFLICT,
            TaskError::Database(_) | TaskError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Internal failure detail stays server-side
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {:?}", self.0);
            "Internal server error".to_string()
        } else {
            self.0.to_string()
        };

        // Combine status code and JSON body into a response
        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

/// Automatic conversion from TaskError to AppError.
///
/// This implementation allows using the `?` operator with functions that
/// return `Result<T, TaskError>` in handlers returning `Result<T, AppError>`.
impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError.
///
/// Infrastructure reports are treated as store failures: 500 externally,
/// full detail logged.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(TaskError::Database(err))
    }
}

/// Maps a TaskError to an HTTP response.
pub fn map_error(err: TaskError) -> Response {
    AppError(err).into_response()
}
