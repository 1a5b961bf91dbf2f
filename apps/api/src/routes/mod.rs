pub mod documents;
pub mod health;
pub mod sessions;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{header, StatusCode},
    response::Response,
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_body_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless document API
        .route("/api/v1/preview", post(documents::handle_preview))
        .route("/api/v1/export", post(documents::handle_export))
        .route("/api/v1/save", post(documents::handle_save))
        .route("/api/v1/load", post(documents::handle_load))
        // Editing sessions
        .route("/api/v1/sessions", post(sessions::handle_create))
        .route(
            "/api/v1/sessions/:id",
            get(sessions::handle_get).delete(sessions::handle_delete),
        )
        .route("/api/v1/sessions/:id/fields", patch(sessions::handle_patch_fields))
        .route("/api/v1/sessions/:id/entries", post(sessions::handle_add_entry))
        .route(
            "/api/v1/sessions/:id/entries/:section/:index",
            delete(sessions::handle_remove_entry),
        )
        .route(
            "/api/v1/sessions/:id/document",
            put(sessions::handle_put_document).get(sessions::handle_get_document),
        )
        .route("/api/v1/sessions/:id/render", get(sessions::handle_render))
        .route("/api/v1/sessions/:id/summary", get(sessions::handle_summary))
        .layer(body_limit)
        .with_state(state)
}

/// A download response with `Content-Disposition: attachment`.
pub(crate) fn attachment(
    content_type: &str,
    filename: &str,
    body: impl Into<Body>,
) -> Result<Response, AppError> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .body(body.into())
        .map_err(|e| AppError::Internal(e.into()))
}
