//! Axum route handlers for the chat panel.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::chat::speech::TranscriptRecognizer;
use crate::chat::ChatSnapshot;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct VoiceRequest {
    pub transcript: String,
}

/// GET /api/v1/sessions/:id/chat
///
/// Polled by the front-end while a reply is being revealed.
pub async fn handle_get_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChatSnapshot>, AppError> {
    let session = state.sessions.get(id).await?;
    Ok(Json(session.chat.snapshot()))
}

/// POST /api/v1/sessions/:id/chat/toggle
pub async fn handle_toggle_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChatSnapshot>, AppError> {
    let session = state.sessions.get(id).await?;
    session.chat.toggle_open();
    Ok(Json(session.chat.snapshot()))
}

/// POST /api/v1/sessions/:id/chat/messages
///
/// Blank text is not an error: the snapshot comes back unchanged.
pub async fn handle_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<ChatSnapshot>, AppError> {
    let session = state.sessions.get(id).await?;
    session.chat.submit(&req.text);
    Ok(Json(session.chat.snapshot()))
}

/// POST /api/v1/sessions/:id/chat/voice
///
/// Accepts a transcript produced by the visitor's browser speech recognition.
pub async fn handle_voice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<VoiceRequest>,
) -> Result<Json<ChatSnapshot>, AppError> {
    let session = state.sessions.get(id).await?;
    let recognizer = TranscriptRecognizer::new(req.transcript);
    session.chat.listen(&recognizer).await;
    Ok(Json(session.chat.snapshot()))
}
