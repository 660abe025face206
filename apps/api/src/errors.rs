use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned when the request body carries no usable profile payload.
pub const PROFILE_REQUIRED: &str = "Profile data is required";

/// Returned in place of an empty service error message.
pub const OPTIMIZE_FALLBACK: &str = "Failed to optimize LinkedIn profile";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The generative-text service failed. Carries the underlying message.
    #[error("LLM error: {0}")]
    Llm(String),

    /// The request body could not be read as an analyze request.
    #[error("{0}")]
    Body(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                let message = if msg.trim().is_empty() {
                    OPTIMIZE_FALLBACK.to_string()
                } else {
                    msg
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            AppError::Body(e) => {
                tracing::error!("Unreadable analyze body: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
