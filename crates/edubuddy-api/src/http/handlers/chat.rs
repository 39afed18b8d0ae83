//! Chat endpoint.
//!
//! POST /api/v1/chat
//!
//! One full exchange per request: validate, resolve the session, apply any
//! persona selection, record the user turn, assemble the prompt, call the
//! model, record the assistant turn, and return the reply. No streaming.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::Instrument;
use uuid::Uuid;

use edubuddy_core::llm::provider::LlmProvider;
use edubuddy_core::prompt::{catalog, PromptBuilder};
use edubuddy_observe::genai_attrs;
use edubuddy_types::chat::MessageRole;
use edubuddy_types::error::ChatError;
use edubuddy_types::llm::{CompletionRequest, Message, Usage};
use edubuddy_types::persona::Persona;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Existing session id to continue; if absent, a new session is created.
    pub session_id: Option<Uuid>,
    /// The user message to send to the mentor.
    pub message: String,
    /// Persona to switch to for this and subsequent exchanges.
    pub persona: Option<String>,
    /// Named quick action under the effective persona (e.g. "debug").
    pub action: Option<String>,
}

/// Response payload for a completed exchange.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub session_id: Uuid,
    pub reply: String,
    pub persona: Persona,
    pub model: String,
    pub usage: Usage,
}

/// POST /api/v1/chat - One request/response exchange with the mentor.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<ApiResponse<ChatReply>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    validate_message(&body.message)?;
    let requested_persona = parse_requested_persona(body.persona.as_deref())?;

    let session_id = body.session_id.unwrap_or_else(Uuid::now_v7);

    // The action is validated against the persona that will answer, which is
    // the requested one when present, otherwise the stored one.
    let persona = match requested_persona {
        Some(p) => p,
        None => state.chat_service.persona(&session_id).await,
    };

    let action_instruction = resolve_action_instruction(persona, body.action.as_deref())?;

    // All validation has passed; persona changes and turns may now be stored.
    if requested_persona.is_some() {
        state.chat_service.set_persona(session_id, persona).await;
    }

    // Record the user turn first; the returned history includes it, matching
    // the window the prompt builder expects.
    let history = state
        .chat_service
        .record_turn(session_id, MessageRole::User, body.message.clone())
        .await;

    let request = CompletionRequest {
        model: state.generation.model.clone(),
        messages: vec![Message {
            role: MessageRole::User,
            content: PromptBuilder::user_prompt(
                persona,
                &history,
                &body.message,
                action_instruction,
            ),
        }],
        system: Some(PromptBuilder::system_prompt(persona)),
        max_output_tokens: state.generation.max_output_tokens,
        temperature: Some(state.generation.temperature),
        top_p: Some(state.generation.top_p),
        top_k: Some(state.generation.top_k),
    };

    let span = tracing::info_span!(
        "chat",
        { genai_attrs::GEN_AI_OPERATION_NAME } = genai_attrs::OP_CHAT,
        { genai_attrs::GEN_AI_PROVIDER_NAME } = state.llm.name(),
        { genai_attrs::GEN_AI_REQUEST_MODEL } = %request.model,
        { genai_attrs::GEN_AI_REQUEST_TEMPERATURE } = state.generation.temperature,
        { genai_attrs::GEN_AI_REQUEST_MAX_TOKENS } = state.generation.max_output_tokens,
        { genai_attrs::GEN_AI_USAGE_INPUT_TOKENS } = tracing::field::Empty,
        { genai_attrs::GEN_AI_USAGE_OUTPUT_TOKENS } = tracing::field::Empty,
        { genai_attrs::GEN_AI_RESPONSE_FINISH_REASONS } = tracing::field::Empty,
    );

    let response = state.llm.complete(&request).instrument(span.clone()).await?;

    span.record(genai_attrs::GEN_AI_USAGE_INPUT_TOKENS, response.usage.prompt_tokens);
    span.record(
        genai_attrs::GEN_AI_USAGE_OUTPUT_TOKENS,
        response.usage.completion_tokens,
    );
    span.record(
        genai_attrs::GEN_AI_RESPONSE_FINISH_REASONS,
        tracing::field::display(response.finish_reason),
    );

    state
        .chat_service
        .record_turn(session_id, MessageRole::Assistant, response.content.clone())
        .await;

    let reply = ChatReply {
        session_id,
        reply: response.content,
        persona,
        model: response.model,
        usage: response.usage,
    };

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(reply, request_id, elapsed))
}

// Validation happens before any persona write or turn is recorded; these
// helpers carry the whole of it.

fn validate_message(message: &str) -> Result<(), ChatError> {
    if message.trim().is_empty() {
        return Err(ChatError::EmptyMessage);
    }
    Ok(())
}

fn parse_requested_persona(raw: Option<&str>) -> Result<Option<Persona>, ChatError> {
    raw.map(|p| {
        p.parse::<Persona>()
            .map_err(|_| ChatError::UnknownPersona(p.to_string()))
    })
    .transpose()
}

/// Resolve an action name against the effective persona's catalog.
fn resolve_action_instruction(
    persona: Persona,
    action: Option<&str>,
) -> Result<Option<&'static str>, ChatError> {
    action
        .map(|action| {
            catalog::action_instruction(persona, action).ok_or_else(|| ChatError::UnknownAction {
                persona: persona.to_string(),
                action: action.to_string(),
            })
        })
        .transpose()
}
