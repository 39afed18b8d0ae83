//! Chat service orchestrating conversation persistence with session fallback.
//!
//! Every operation tries the repository first. On a repository error the
//! operation logs a warning and degrades to the in-memory [`SessionCache`],
//! so a database outage never blocks a chat exchange. Successful repository
//! writes are mirrored into the cache to keep the fallback warm.

use edubuddy_types::chat::{ChatMessage, Turn};
use edubuddy_types::error::RepositoryError;
use edubuddy_types::llm::MessageRole;
use edubuddy_types::persona::Persona;
use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use crate::chat::fallback::SessionCache;
use crate::chat::repository::ConversationRepository;

/// Orchestrates conversation lifecycle with database-to-memory fallback.
///
/// Generic over `ConversationRepository` to maintain clean architecture
/// (edubuddy-core never depends on edubuddy-infra).
pub struct ChatService<R: ConversationRepository> {
    repo: R,
    cache: SessionCache,
}

impl<R: ConversationRepository> ChatService<R> {
    /// Create a new chat service with the given repository.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            cache: SessionCache::new(),
        }
    }

    /// Access the repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Record one side of an exchange and return the full history.
    ///
    /// Persists the message and bumps the conversation timestamp; on
    /// repository failure the turn lands in the session cache only and the
    /// cached history is returned instead.
    pub async fn record_turn(
        &self,
        session_id: Uuid,
        role: MessageRole,
        content: String,
    ) -> Vec<Turn> {
        let turn = Turn::now(role, content.clone());

        match self.persist_turn(&session_id, role, content).await {
            Ok(history) => {
                // Mirror the authoritative tail so the fallback is warm if
                // the database starts failing mid-conversation.
                self.cache.replace_history(session_id, history.clone());
                history
            }
            Err(err) => {
                warn!(session_id = %session_id, error = %err, "repository write failed, using session fallback");
                self.cache.record_turn(session_id, turn);
                self.cache.history(&session_id)
            }
        }
    }

    async fn persist_turn(
        &self,
        session_id: &Uuid,
        role: MessageRole,
        content: String,
    ) -> Result<Vec<Turn>, RepositoryError> {
        let conversation = self.repo.get_or_create(session_id).await?;
        let message = ChatMessage {
            id: Uuid::now_v7(),
            conversation_id: conversation.id,
            role,
            content,
            created_at: Utc::now(),
        };
        self.repo.append_message(&message).await?;
        self.repo.touch(&conversation.id).await?;

        let messages = self.repo.list_messages(&conversation.id).await?;
        Ok(messages.into_iter().map(Turn::from).collect())
    }

    /// Conversation history for a session, oldest first.
    ///
    /// Falls back to the session cache on repository failure; an unknown
    /// session yields an empty history either way.
    pub async fn history(&self, session_id: &Uuid) -> Vec<Turn> {
        let from_db = async {
            let conversation = self.repo.get_or_create(session_id).await?;
            self.repo.list_messages(&conversation.id).await
        };

        match from_db.await {
            Ok(messages) => messages.into_iter().map(Turn::from).collect(),
            Err(err) => {
                warn!(session_id = %session_id, error = %err, "repository read failed, using session fallback");
                self.cache.history(session_id)
            }
        }
    }

    /// Current persona for a session, defaulting to `general`.
    pub async fn persona(&self, session_id: &Uuid) -> Persona {
        match self.repo.get_or_create(session_id).await {
            Ok(conversation) => conversation.persona.unwrap_or_default(),
            Err(err) => {
                warn!(session_id = %session_id, error = %err, "repository read failed, using session fallback");
                self.cache.persona(session_id).unwrap_or_default()
            }
        }
    }

    /// Set the persona for a session.
    ///
    /// The cache is updated regardless of the repository outcome, so the
    /// selection survives a database outage.
    pub async fn set_persona(&self, session_id: Uuid, persona: Persona) {
        let result = async {
            let conversation = self.repo.get_or_create(&session_id).await?;
            self.repo.set_persona(&conversation.id, Some(persona)).await
        };

        if let Err(err) = result.await {
            warn!(session_id = %session_id, error = %err, "repository write failed, persona kept in session fallback");
        }
        self.cache.set_persona(session_id, Some(persona));
    }

    /// Reset a session: delete its messages, clear its persona, drop its
    /// cache entry. A session with no stored conversation resets cleanly.
    pub async fn reset(&self, session_id: &Uuid) {
        let result = async {
            let conversation = self.repo.get_or_create(session_id).await?;
            self.repo.clear_messages(&conversation.id).await?;
            self.repo.set_persona(&conversation.id, None).await
        };

        if let Err(err) = result.await {
            warn!(session_id = %session_id, error = %err, "repository reset failed, clearing session fallback only");
        }
        self.cache.clear(session_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edubuddy_types::chat::Conversation;
    use edubuddy_types::error::RepositoryError;
    use std::sync::Mutex;

    /// In-memory repository backing the happy-path tests.
    #[derive(Default)]
    struct InMemoryRepo {
        conversations: Mutex<Vec<Conversation>>,
        messages: Mutex<Vec<ChatMessage>>,
    }

    impl ConversationRepository for InMemoryRepo {
        async fn get_or_create(&self, session_id: &Uuid) -> Result<Conversation, RepositoryError> {
            let mut conversations = self.conversations.lock().unwrap();
            if let Some(c) = conversations.iter().find(|c| c.session_id == *session_id) {
                return Ok(c.clone());
            }
            let conversation = Conversation {
                id: Uuid::now_v7(),
                session_id: *session_id,
                persona: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            };
            conversations.push(conversation.clone());
            Ok(conversation)
        }

        async fn set_persona(
            &self,
            conversation_id: &Uuid,
            persona: Option<Persona>,
        ) -> Result<(), RepositoryError> {
            let mut conversations = self.conversations.lock().unwrap();
            let conversation = conversations
                .iter_mut()
                .find(|c| c.id == *conversation_id)
                .ok_or(RepositoryError::NotFound)?;
            conversation.persona = persona;
            Ok(())
        }

        async fn append_message(&self, message: &ChatMessage) -> Result<(), RepositoryError> {
            self.messages.lock().unwrap().push(message.clone());
            Ok(())
        }

        async fn touch(&self, conversation_id: &Uuid) -> Result<(), RepositoryError> {
            let mut conversations = self.conversations.lock().unwrap();
            let conversation = conversations
                .iter_mut()
                .find(|c| c.id == *conversation_id)
                .ok_or(RepositoryError::NotFound)?;
            conversation.updated_at = Utc::now();
            Ok(())
        }

        async fn list_messages(
            &self,
            conversation_id: &Uuid,
        ) -> Result<Vec<ChatMessage>, RepositoryError> {
            let mut messages: Vec<ChatMessage> = self
                .messages
                .lock()
                .unwrap()
                .iter()
                .filter(|m| m.conversation_id == *conversation_id)
                .cloned()
                .collect();
            messages.sort_by_key(|m| m.created_at);
            Ok(messages)
        }

        async fn clear_messages(&self, conversation_id: &Uuid) -> Result<(), RepositoryError> {
            self.messages
                .lock()
                .unwrap()
                .retain(|m| m.conversation_id != *conversation_id);
            Ok(())
        }
    }

    /// Repository that fails every operation, exercising the fallback path.
    struct FailingRepo;

    impl ConversationRepository for FailingRepo {
        async fn get_or_create(&self, _: &Uuid) -> Result<Conversation, RepositoryError> {
            Err(RepositoryError::Connection)
        }
        async fn set_persona(
            &self,
            _: &Uuid,
            _: Option<Persona>,
        ) -> Result<(), RepositoryError> {
            Err(RepositoryError::Connection)
        }
        async fn append_message(&self, _: &ChatMessage) -> Result<(), RepositoryError> {
            Err(RepositoryError::Connection)
        }
        async fn touch(&self, _: &Uuid) -> Result<(), RepositoryError> {
            Err(RepositoryError::Connection)
        }
        async fn list_messages(&self, _: &Uuid) -> Result<Vec<ChatMessage>, RepositoryError> {
            Err(RepositoryError::Connection)
        }
        async fn clear_messages(&self, _: &Uuid) -> Result<(), RepositoryError> {
            Err(RepositoryError::Connection)
        }
    }

    #[tokio::test]
    async fn test_record_turn_persists_and_returns_history() {
        let service = ChatService::new(InMemoryRepo::default());
        let sid = Uuid::now_v7();

        let history = service
            .record_turn(sid, MessageRole::User, "hello".to_string())
            .await;
        assert_eq!(history.len(), 1);

        let history = service
            .record_turn(sid, MessageRole::Assistant, "hi there".to_string())
            .await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, MessageRole::User);
        assert_eq!(history[1].role, MessageRole::Assistant);
    }

    #[tokio::test]
    async fn test_history_empty_for_unknown_session() {
        let service = ChatService::new(InMemoryRepo::default());
        assert!(service.history(&Uuid::now_v7()).await.is_empty());
    }

    #[tokio::test]
    async fn test_persona_defaults_to_general() {
        let service = ChatService::new(InMemoryRepo::default());
        let sid = Uuid::now_v7();
        assert_eq!(service.persona(&sid).await, Persona::General);
    }

    #[tokio::test]
    async fn test_set_persona_roundtrip() {
        let service = ChatService::new(InMemoryRepo::default());
        let sid = Uuid::now_v7();

        service.set_persona(sid, Persona::Stem).await;
        assert_eq!(service.persona(&sid).await, Persona::Stem);
    }

    #[tokio::test]
    async fn test_reset_clears_history_and_persona() {
        let service = ChatService::new(InMemoryRepo::default());
        let sid = Uuid::now_v7();

        service.set_persona(sid, Persona::Code).await;
        service
            .record_turn(sid, MessageRole::User, "hello".to_string())
            .await;

        service.reset(&sid).await;
        assert!(service.history(&sid).await.is_empty());
        assert_eq!(service.persona(&sid).await, Persona::General);
    }

    #[tokio::test]
    async fn test_record_turn_survives_repository_failure() {
        let service = ChatService::new(FailingRepo);
        let sid = Uuid::now_v7();

        let history = service
            .record_turn(sid, MessageRole::User, "hello".to_string())
            .await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].content, "hello");

        // Subsequent reads see the cached turn
        let history = service.history(&sid).await;
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn test_fallback_history_is_bounded() {
        let service = ChatService::new(FailingRepo);
        let sid = Uuid::now_v7();

        for i in 0..14 {
            service
                .record_turn(sid, MessageRole::User, format!("msg {i}"))
                .await;
        }

        let history = service.history(&sid).await;
        assert_eq!(history.len(), 10);
        assert_eq!(history[0].content, "msg 4");
    }

    #[tokio::test]
    async fn test_persona_survives_repository_failure() {
        let service = ChatService::new(FailingRepo);
        let sid = Uuid::now_v7();

        service.set_persona(sid, Persona::Business).await;
        assert_eq!(service.persona(&sid).await, Persona::Business);
    }

    #[tokio::test]
    async fn test_reset_clears_fallback_on_repository_failure() {
        let service = ChatService::new(FailingRepo);
        let sid = Uuid::now_v7();

        service
            .record_turn(sid, MessageRole::User, "hello".to_string())
            .await;
        service.reset(&sid).await;
        assert!(service.history(&sid).await.is_empty());
    }
}
