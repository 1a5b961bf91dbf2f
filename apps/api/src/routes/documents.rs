//! Stateless document endpoints. Every request body is the persisted form of a
//! resume; nothing is kept between calls.

use axum::{response::Response, Json};
use bytes::Bytes;
use resume_builder::validation::{check_resume, FieldReport};
use resume_builder::{preview, read, render, serializer, PreviewSummary, Resume};
use serde::Serialize;
use tracing::debug;

use super::attachment;
use crate::errors::AppError;

#[derive(Serialize)]
pub struct PreviewResponse {
    pub html: String,
    pub summary: String,
    pub overview: PreviewSummary,
    pub field_report: FieldReport,
}

#[derive(Serialize)]
pub struct LoadResponse {
    pub data: Resume,
}

/// POST /api/v1/preview
pub async fn handle_preview(body: Bytes) -> Result<Json<PreviewResponse>, AppError> {
    let resume = read(&body)?;
    let overview = preview(&resume);
    let field_report = check_resume(&resume);
    debug!(
        issues = field_report.issues.len(),
        entries = overview.total_entries,
        "preview requested"
    );

    Ok(Json(PreviewResponse {
        html: render(&resume),
        summary: overview.to_string(),
        overview,
        field_report,
    }))
}

/// POST /api/v1/export
pub async fn handle_export(body: Bytes) -> Result<Response, AppError> {
    let resume = read(&body)?;
    attachment("text/html; charset=utf-8", "resume.html", render(&resume))
}

/// POST /api/v1/save
/// Re-emits the document in canonical persisted form.
pub async fn handle_save(body: Bytes) -> Result<Response, AppError> {
    let resume = read(&body)?;
    attachment("application/json", "resume_data.json", serializer::write(&resume))
}

/// POST /api/v1/load
pub async fn handle_load(body: Bytes) -> Result<Json<LoadResponse>, AppError> {
    let data = read(&body)?;
    Ok(Json(LoadResponse { data }))
}
