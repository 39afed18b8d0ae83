//! Business logic for EduBuddy.
//!
//! This crate defines the persona/prompt catalog, the prompt builder, the
//! repository and provider traits, and the chat service with its in-memory
//! session fallback. It never depends on edubuddy-infra; concrete SQLite and
//! Gemini implementations are injected through the traits defined here.

pub mod chat;
pub mod llm;
pub mod prompt;
