use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::assist::chatbot::{match_topic, ChatTopic};
use crate::assist::cover_letter::CoverLetterContext;
use crate::assist::enhance::EnhanceSection;
use crate::errors::AppError;
use crate::forms::path::FieldPath;
use crate::models::Document;
use crate::routes::documents::{load_document, not_found};
use crate::routes::guards::CurrentUser;
use crate::state::AppState;

const CONTENT_FIELD: &str = "content";

#[derive(Serialize)]
pub struct GeneratedLetter {
    pub content: String,
    pub backend: &'static str,
}

/// POST /api/v1/assist/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Json(ctx): Json<CoverLetterContext>,
) -> Result<Json<GeneratedLetter>, AppError> {
    let content = state.assistant.cover_letter(&ctx).await?;
    Ok(Json(GeneratedLetter {
        content,
        backend: state.assistant.backend(),
    }))
}

/// POST /api/v1/documents/:id/assist/cover-letter
///
/// Generates from the document's own fields and stores the result in `content`.
/// No lock is held while the assistant works.
pub async fn handle_document_cover_letter(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<GeneratedLetter>, AppError> {
    let ctx = match load_document(&state, id).await? {
        Document::CoverLetter(letter) => CoverLetterContext::from(&letter),
        other => {
            return Err(AppError::Validation(format!(
                "{:?} documents have no cover letter to generate",
                other.kind()
            )))
        }
    };

    let content = state.assistant.cover_letter(&ctx).await?;

    let field: FieldPath = CONTENT_FIELD.parse()?;
    state
        .workspace
        .write()
        .await
        .update(id, |doc| doc.set(&field, Value::String(content.clone())))
        .ok_or_else(|| not_found(id))??;
    info!("Stored generated cover letter in {id}");

    Ok(Json(GeneratedLetter {
        content,
        backend: state.assistant.backend(),
    }))
}

#[derive(Deserialize)]
pub struct EnhanceRequest {
    pub section: EnhanceSection,
    /// Field to read (and, with `apply`, overwrite), e.g. `summary` or `experience.0.description`.
    pub path: Option<String>,
    /// Text to enhance when no `path` is given.
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub apply: bool,
}

#[derive(Serialize)]
pub struct EnhanceResponse {
    pub original: String,
    pub suggestion: Option<String>,
    pub applied: bool,
}

/// POST /api/v1/documents/:id/assist/enhance
pub async fn handle_enhance(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let path = req
        .path
        .as_deref()
        .map(str::parse::<FieldPath>)
        .transpose()?;

    let original = match &path {
        Some(path) => {
            let value = load_document(&state, id).await?.get(path)?;
            value.as_str().unwrap_or_default().to_string()
        }
        None => {
            load_document(&state, id).await?;
            req.text.clone()
        }
    };

    let suggestion = state.assistant.enhance(req.section, &original).await?;

    let mut applied = false;
    if let (true, Some(path), Some(text)) = (req.apply, &path, &suggestion) {
        state
            .workspace
            .write()
            .await
            .update(id, |doc| doc.set(path, Value::String(text.clone())))
            .ok_or_else(|| not_found(id))??;
        applied = true;
    }

    Ok(Json(EnhanceResponse {
        original,
        suggestion,
        applied,
    }))
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub topic: Option<ChatTopic>,
}

/// POST /api/v1/assist/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let reply = state.assistant.chat(&req.message).await?;
    Ok(Json(ChatResponse {
        reply,
        topic: match_topic(&req.message),
    }))
}
