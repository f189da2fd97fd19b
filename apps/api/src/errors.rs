use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::assist::AssistError;
use crate::forms::FormError;
use crate::matcher::MatchError;
use crate::session::storage::StorageError;
use crate::validation::FieldErrors;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid form: {}", .0.summary())]
    InvalidFields(FieldErrors),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Assist(#[from] AssistError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::InvalidFields(errors)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidFields(errors) => {
                let body = Json(json!({
                    "error": {
                        "code": "VALIDATION_ERROR",
                        "message": errors.summary(),
                        "fields": errors.errors(),
                    }
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
            ),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "Access denied".to_string(),
            ),
            AppError::Form(e) => (StatusCode::BAD_REQUEST, "FORM_ERROR", e.to_string()),
            AppError::Assist(AssistError::MissingContext(msg)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "MISSING_CONTEXT",
                msg.clone(),
            ),
            AppError::Assist(AssistError::Unavailable(msg)) => {
                tracing::error!("Assistant error: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "ASSIST_UNAVAILABLE",
                    "The writing assistant is unavailable, please try again".to_string(),
                )
            }
            AppError::Match(e @ MatchError::Pdf(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "UNREADABLE_UPLOAD", e.to_string())
            }
            AppError::Match(e) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string()),
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "Could not save your session".to_string(),
                )
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

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_field_errors_carry_fields() {
        let mut fields = FieldErrors::new();
        fields.add("email", "Invalid email address");
        let (status, body) = body_json(fields.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Invalid email address");
        assert_eq!(body["error"]["fields"][0]["field"], "email");
    }

    #[tokio::test]
    async fn test_missing_context_is_shown_verbatim() {
        let err = AppError::from(AssistError::MissingContext("Fill it in".to_string()));
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "MISSING_CONTEXT");
        assert_eq!(body["error"]["message"], "Fill it in");
    }

    #[tokio::test]
    async fn test_form_error_is_bad_request() {
        let err = AppError::from(FormError::UnknownField("nope".to_string()));
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "FORM_ERROR");
    }
}
