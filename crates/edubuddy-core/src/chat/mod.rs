//! Conversation persistence and the chat service.

pub mod fallback;
pub mod repository;
pub mod service;

pub use service::ChatService;
