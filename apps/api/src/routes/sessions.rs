//! Editing-session endpoints: one owned `Resume` per session, mutated through
//! whole-value field sets and entry append/remove.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use resume_builder::{
    read, render, serializer, summarize, Contact, Entry, Resume, ResumeError, Section,
};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info};
use uuid::Uuid;

use super::attachment;
use crate::errors::AppError;
use crate::sessions::Session;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resume: Resume,
}

impl SessionView {
    fn of(id: Uuid, session: &Session) -> Self {
        SessionView {
            id,
            created_at: session.created_at,
            updated_at: session.updated_at,
            resume: session.resume.clone(),
        }
    }
}

/// Partial update of the scalar fields. Absent keys are left alone;
/// `"summary": null` removes the summary.
#[derive(Debug, Default, Deserialize)]
pub struct FieldsPatch {
    pub name: Option<String>,
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub summary: Option<Option<String>>,
    pub contact: Option<Contact>,
}

/// Distinguishes an explicit `null` from an absent key.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
pub struct AddEntryRequest {
    pub section: String,
    pub entry: Value,
}

/// Decodes a JSON request body: malformed bytes are `Parse`, a body of the
/// wrong shape is `Structure`.
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ResumeError::Parse(e.to_string()))?;
    serde_json::from_value(value).map_err(|e| ResumeError::Structure(e.to_string()).into())
}

fn session_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::Validation(format!("Invalid session id: {raw}")))
}

/// POST /api/v1/sessions
pub async fn handle_create(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (id, created_at) = state.sessions.create().await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "created_at": created_at })),
    ))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, AppError> {
    let id = session_id(&id)?;
    let handle = state.sessions.get(id).await?;
    let session = handle.lock().await;
    Ok(Json(SessionView::of(id, &session)))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = session_id(&id)?;
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/sessions/:id/fields
pub async fn handle_patch_fields(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<SessionView>, AppError> {
    let id = session_id(&id)?;
    let patch: FieldsPatch = decode(&body)?;
    let handle = state.sessions.get(id).await?;
    let mut session = handle.lock().await;

    let resume = &mut session.resume;
    if let Some(name) = patch.name {
        resume.set_name(name);
    }
    if let Some(subtitle) = patch.subtitle {
        resume.set_subtitle(subtitle);
    }
    match patch.summary {
        Some(Some(summary)) => resume.set_summary(summary),
        Some(None) => resume.clear_summary(),
        None => {}
    }
    if let Some(contact) = patch.contact {
        resume.set_contact(contact);
    }
    session.touch();

    Ok(Json(SessionView::of(id, &session)))
}

/// POST /api/v1/sessions/:id/entries
/// Validates the entry as a whole value before appending it.
pub async fn handle_add_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let id = session_id(&id)?;
    let req: AddEntryRequest = decode(&body)?;
    let section: Section = req.section.parse()?;
    let entry = Entry::from_value(section, req.entry)?;

    let handle = state.sessions.get(id).await?;
    let mut session = handle.lock().await;
    let len = session.resume.push(entry);
    session.touch();
    debug!("Session {id}: appended to {section} (len {len})");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "section": section, "index": len - 1, "len": len })),
    ))
}

/// DELETE /api/v1/sessions/:id/entries/:section/:index
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    Path((id, section, index)): Path<(String, String, String)>,
) -> Result<StatusCode, AppError> {
    let id = session_id(&id)?;
    let section: Section = section.parse()?;
    let index: usize = index
        .parse()
        .map_err(|_| AppError::Validation(format!("Invalid entry index: {index}")))?;

    let handle = state.sessions.get(id).await?;
    let mut session = handle.lock().await;
    session.resume.remove(section, index)?;
    session.touch();
    debug!("Session {id}: removed {section}[{index}]");

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:id/document
/// The body is parsed completely before the session is touched, so a bad
/// document leaves the current resume as it was.
pub async fn handle_put_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<SessionView>, AppError> {
    let id = session_id(&id)?;
    let handle = state.sessions.get(id).await?;
    let loaded = read(&body)?;

    let mut session = handle.lock().await;
    session.resume = loaded;
    session.touch();
    info!("Session {id}: document replaced ({} bytes)", body.len());

    Ok(Json(SessionView::of(id, &session)))
}

/// GET /api/v1/sessions/:id/document
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = session_id(&id)?;
    let handle = state.sessions.get(id).await?;
    let bytes = serializer::write(&handle.lock().await.resume);
    attachment("application/json", "resume_data.json", bytes)
}

/// GET /api/v1/sessions/:id/render
pub async fn handle_render(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = session_id(&id)?;
    let handle = state.sessions.get(id).await?;
    let session = handle.lock().await;
    Ok(Html(render(&session.resume)))
}

/// GET /api/v1/sessions/:id/summary
pub async fn handle_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = session_id(&id)?;
    let handle = state.sessions.get(id).await?;
    let text = summarize(&handle.lock().await.resume);
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text).into_response())
}
