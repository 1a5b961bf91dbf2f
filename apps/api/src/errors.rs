use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use resume_builder::ResumeError;
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Resume(#[from] ResumeError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn session_not_found(id: impl std::fmt::Display) -> Self {
        AppError::NotFound(format!("No editing session with id {id}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Resume(e @ ResumeError::Parse(_)) => {
                (StatusCode::BAD_REQUEST, "PARSE_ERROR", e.to_string())
            }
            AppError::Resume(e @ ResumeError::Structure(_)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "STRUCTURE_ERROR",
                e.to_string(),
            ),
            AppError::Resume(e @ ResumeError::Index { .. }) => {
                (StatusCode::BAD_REQUEST, "INDEX_OUT_OF_RANGE", e.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
