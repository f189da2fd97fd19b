use std::time::Duration;

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::matcher::{
    analyze, is_supported_upload, resume_text_from_upload, MatchError, MatchReport, MatchRequest,
    UNSUPPORTED_UPLOAD,
};
use crate::routes::guards::CurrentUser;
use crate::state::AppState;

async fn run(state: &AppState, req: MatchRequest) -> Result<MatchReport, AppError> {
    let report = analyze(&req)?;
    // Shares the generation pause.
    let delay: Duration = state.config.cover_letter_delay;
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    info!("Job match analysed: ATS {}", report.ats_score);
    Ok(report)
}

/// PDF parsing is CPU-bound, so it runs off the async executor.
async fn extract_resume_text(filename: String, bytes: Bytes) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || resume_text_from_upload(&filename, &bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("resume text extraction failed: {e}")))??;
    Ok(text)
}

/// POST /api/v1/job-matcher/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchReport>, AppError> {
    Ok(Json(run(&state, req).await?))
}

/// POST /api/v1/job-matcher/upload
///
/// Multipart form: `jobDescription` (text), optional `keywords` (comma separated),
/// and a `resume` file (PDF or DOCX).
pub async fn handle_upload(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    mut multipart: Multipart,
) -> Result<Json<MatchReport>, AppError> {
    let mut req = MatchRequest::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "jobDescription" => {
                req.job_description = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(e.to_string()))?;
            }
            "keywords" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(e.to_string()))?;
                req.keywords = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            "resume" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                if !is_supported_upload(&filename, content_type.as_deref()) {
                    return Err(MatchError::UnsupportedUpload(UNSUPPORTED_UPLOAD).into());
                }
                let bytes: Bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(e.to_string()))?;
                info!("Received resume upload {filename} ({} bytes)", bytes.len());
                req.resume_text = extract_resume_text(filename, bytes).await?;
            }
            _ => {}
        }
    }

    Ok(Json(run(&state, req).await?))
}
