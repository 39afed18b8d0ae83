//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use edubuddy_types::error::ChatError;
use edubuddy_types::llm::LlmError;

use crate::http::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Chat request validation errors.
    Chat(ChatError),
    /// Upstream model failure.
    Llm(LlmError),
    /// Validation error outside the chat domain.
    Validation(String),
    /// Generic internal error.
    Internal(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Llm(e)
    }
}

impl AppError {
    fn status_code_and_message(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Chat(e) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string()),
            AppError::Llm(LlmError::RateLimited) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "UPSTREAM_RATE_LIMITED",
                "The model is rate limiting requests, try again shortly".to_string(),
            ),
            AppError::Llm(LlmError::AuthenticationFailed) => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_AUTH_ERROR",
                "Authentication with the model provider failed".to_string(),
            ),
            AppError::Llm(e) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", e.to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.status_code_and_message();
        (status, ApiResponse::error(code, message)).into_response()
    }
}
