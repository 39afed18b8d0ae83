use thiserror::Error;

/// Errors from repository operations (used by trait definitions in edubuddy-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}

/// Errors related to chat request validation.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message is required")]
    EmptyMessage,

    #[error("invalid persona: '{0}'")]
    UnknownPersona(String),

    #[error("unknown action '{action}' for persona '{persona}'")]
    UnknownAction { persona: String, action: String },
}
