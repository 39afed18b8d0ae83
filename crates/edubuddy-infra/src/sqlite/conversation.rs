//! SQLite conversation repository implementation.
//!
//! Implements `ConversationRepository` from `edubuddy-core` using sqlx with
//! split read/write pools: raw queries, private Row structs, reads on the
//! reader pool and writes on the writer pool.

use edubuddy_core::chat::repository::ConversationRepository;
use edubuddy_types::chat::{ChatMessage, Conversation};
use edubuddy_types::error::RepositoryError;
use edubuddy_types::llm::MessageRole;
use edubuddy_types::persona::Persona;
use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ConversationRepository`.
pub struct SqliteConversationRepository {
    pool: DatabasePool,
}

impl SqliteConversationRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Private Row types for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

struct ConversationRow {
    id: String,
    session_id: String,
    persona: Option<String>,
    created_at: String,
    updated_at: String,
}

impl ConversationRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            session_id: row.try_get("session_id")?,
            persona: row.try_get("persona")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn into_conversation(self) -> Result<Conversation, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Query(format!("invalid conversation id: {e}")))?;
        let session_id = Uuid::parse_str(&self.session_id)
            .map_err(|e| RepositoryError::Query(format!("invalid session_id: {e}")))?;
        let persona: Option<Persona> = self
            .persona
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(|e: String| RepositoryError::Query(e))?;

        Ok(Conversation {
            id,
            session_id,
            persona,
            created_at: parse_datetime(&self.created_at)?,
            updated_at: parse_datetime(&self.updated_at)?,
        })
    }
}

struct MessageRow {
    id: String,
    conversation_id: String,
    role: String,
    content: String,
    created_at: String,
}

impl MessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            conversation_id: row.try_get("conversation_id")?,
            role: row.try_get("role")?,
            content: row.try_get("content")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_message(self) -> Result<ChatMessage, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Query(format!("invalid message id: {e}")))?;
        let conversation_id = Uuid::parse_str(&self.conversation_id)
            .map_err(|e| RepositoryError::Query(format!("invalid conversation_id: {e}")))?;
        let role: MessageRole = self
            .role
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;

        Ok(ChatMessage {
            id,
            conversation_id,
            role,
            content: self.content,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

// ---------------------------------------------------------------------------
// ConversationRepository implementation
// ---------------------------------------------------------------------------

impl ConversationRepository for SqliteConversationRepository {
    async fn get_or_create(&self, session_id: &Uuid) -> Result<Conversation, RepositoryError> {
        let row = sqlx::query("SELECT * FROM conversations WHERE session_id = ?")
            .bind(session_id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if let Some(row) = row {
            let conversation_row =
                ConversationRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            return conversation_row.into_conversation();
        }

        let conversation = Conversation {
            id: Uuid::now_v7(),
            session_id: *session_id,
            persona: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        sqlx::query(
            r#"INSERT INTO conversations (id, session_id, persona, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(conversation.id.to_string())
        .bind(conversation.session_id.to_string())
        .bind(conversation.persona.map(|p| p.to_string()))
        .bind(format_datetime(&conversation.created_at))
        .bind(format_datetime(&conversation.updated_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        tracing::info!(conversation_id = %conversation.id, "created new conversation");
        Ok(conversation)
    }

    async fn set_persona(
        &self,
        conversation_id: &Uuid,
        persona: Option<Persona>,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE conversations SET persona = ?, updated_at = ? WHERE id = ?")
            .bind(persona.map(|p| p.to_string()))
            .bind(format_datetime(&Utc::now()))
            .bind(conversation_id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn append_message(&self, message: &ChatMessage) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO messages (id, conversation_id, role, content, created_at)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(message.id.to_string())
        .bind(message.conversation_id.to_string())
        .bind(message.role.to_string())
        .bind(&message.content)
        .bind(format_datetime(&message.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn touch(&self, conversation_id: &Uuid) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE conversations SET updated_at = ? WHERE id = ?")
            .bind(format_datetime(&Utc::now()))
            .bind(conversation_id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;
        Ok(())
    }

    async fn list_messages(
        &self,
        conversation_id: &Uuid,
    ) -> Result<Vec<ChatMessage>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM messages WHERE conversation_id = ? ORDER BY created_at ASC, id ASC",
        )
        .bind(conversation_id.to_string())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| {
                MessageRow::from_row(row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?
                    .into_message()
            })
            .collect()
    }

    async fn clear_messages(&self, conversation_id: &Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM messages WHERE conversation_id = ?")
            .bind(conversation_id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;
        Ok(())
    }
}
