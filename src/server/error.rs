//! Error kinds surfaced over HTTP and their status-code mapping.

use crate::task::{
    domain::TaskDomainError,
    ports::TaskRepositoryError,
    services::TaskServiceError,
};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Closed set of error kinds the HTTP boundary can surface.
///
/// Lower layers pass errors upward unchanged in meaning; this type performs
/// the one and only mapping to status codes, exhaustively.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body or a path parameter could not be decoded.
    #[error("invalid request: {0}")]
    Decode(String),

    /// Task content failed a validation rule.
    #[error(transparent)]
    Validation(TaskDomainError),

    /// No task matched the requested identifier.
    #[error(transparent)]
    NotFound(TaskRepositoryError),

    /// The store failed; details stay server-side.
    #[error(transparent)]
    Store(TaskRepositoryError),
}

impl ApiError {
    /// Creates a decode error with the given message.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Validation(domain) => Self::Validation(domain),
            TaskServiceError::Repository(repo @ TaskRepositoryError::NotFound(_)) => {
                Self::NotFound(repo)
            }
            TaskServiceError::Repository(repo) => Self::Store(repo),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Decode(rejection.body_text())
    }
}

/// JSON error body returned to clients.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Decode(_) | Self::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            Self::Store(err) => {
                tracing::error!(error = %err, "store failure while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal storage error".to_owned(),
                )
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
