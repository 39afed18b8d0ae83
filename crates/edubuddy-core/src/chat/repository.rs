//! ConversationRepository trait definition.
//!
//! CRUD operations for conversations and their messages. Implementations
//! live in edubuddy-infra (e.g. `SqliteConversationRepository`).
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).

use edubuddy_types::chat::{ChatMessage, Conversation};
use edubuddy_types::error::RepositoryError;
use edubuddy_types::persona::Persona;
use uuid::Uuid;

/// Repository trait for conversation and message persistence.
pub trait ConversationRepository: Send + Sync {
    /// Fetch the conversation for a session id, creating it when absent.
    fn get_or_create(
        &self,
        session_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Conversation, RepositoryError>> + Send;

    /// Set (or clear) the persona on a conversation.
    fn set_persona(
        &self,
        conversation_id: &Uuid,
        persona: Option<Persona>,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Append a message to a conversation.
    fn append_message(
        &self,
        message: &ChatMessage,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Bump the conversation's updated_at timestamp.
    fn touch(
        &self,
        conversation_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Get all messages for a conversation, ordered by created_at ASC.
    fn list_messages(
        &self,
        conversation_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, RepositoryError>> + Send;

    /// Delete all messages from a conversation, keeping the conversation row.
    fn clear_messages(
        &self,
        conversation_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
