//! Conversation and message types.
//!
//! A `Conversation` is the durable record keyed by the client-held session id.
//! `ChatMessage` rows belong to a conversation and are ordered by `created_at`.
//! `Turn` is the lightweight shape used for history payloads and the
//! in-memory session fallback cache.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::persona::Persona;

// Re-export MessageRole from the llm module (it's used in both chat and llm contexts).
pub use crate::llm::MessageRole;

/// A conversation between one browser session and the mentor.
///
/// `session_id` is the client-held identifier; `persona` is the explicitly
/// selected specialization, if any (`None` means the default applies).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub session_id: Uuid,
    pub persona: Option<Persona>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single persisted message within a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// One side of an exchange, without storage identifiers.
///
/// Used for history responses and the session fallback cache, where the
/// conversation id may not exist (the database may be unreachable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    /// Create a turn stamped with the current time.
    pub fn now(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

impl From<ChatMessage> for Turn {
    fn from(msg: ChatMessage) -> Self {
        Self {
            role: msg.role,
            content: msg.content,
            created_at: msg.created_at,
        }
    }
}
