//! Persona selection endpoint.
//!
//! POST /api/v1/persona

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use edubuddy_core::prompt::catalog;
use edubuddy_types::error::ChatError;
use edubuddy_types::persona::Persona;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for persona selection.
#[derive(Debug, Deserialize)]
pub struct SetPersonaRequest {
    pub session_id: Uuid,
    pub persona: String,
}

/// Response payload after a persona change.
#[derive(Debug, Serialize)]
pub struct PersonaReply {
    pub persona: Persona,
    /// Quick actions available under this persona.
    pub actions: Vec<&'static str>,
}

/// POST /api/v1/persona - Set the mentor persona for a session.
pub async fn set_persona(
    State(state): State<AppState>,
    Json(body): Json<SetPersonaRequest>,
) -> Result<ApiResponse<PersonaReply>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let persona: Persona = body
        .persona
        .parse()
        .map_err(|_| ChatError::UnknownPersona(body.persona.clone()))?;

    state.chat_service.set_persona(body.session_id, persona).await;

    let reply = PersonaReply {
        persona,
        actions: catalog::action_names(persona),
    };

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(reply, request_id, elapsed))
}
