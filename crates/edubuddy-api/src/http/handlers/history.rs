//! Conversation history endpoints.
//!
//! - GET  /api/v1/history?session_id=... - Get the conversation history
//! - POST /api/v1/reset                  - Reset the conversation

use std::time::Instant;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use edubuddy_types::chat::Turn;
use edubuddy_types::persona::Persona;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Query parameters for history retrieval.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub session_id: Uuid,
}

/// Response payload for history retrieval.
#[derive(Debug, Serialize)]
pub struct HistoryReply {
    pub history: Vec<Turn>,
    pub persona: Persona,
}

/// Request body for a conversation reset.
#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    pub session_id: Uuid,
}

/// GET /api/v1/history - Conversation history and current persona.
///
/// An unknown session id yields an empty history with the default persona.
pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<ApiResponse<HistoryReply>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let history = state.chat_service.history(&query.session_id).await;
    let persona = state.chat_service.persona(&query.session_id).await;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(
        HistoryReply { history, persona },
        request_id,
        elapsed,
    ))
}

/// POST /api/v1/reset - Clear messages and persona for a session.
pub async fn reset_conversation(
    State(state): State<AppState>,
    Json(body): Json<ResetRequest>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    state.chat_service.reset(&body.session_id).await;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(
        serde_json::json!({"cleared": true}),
        request_id,
        elapsed,
    ))
}
