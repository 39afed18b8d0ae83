//! Shared domain types for EduBuddy.
//!
//! This crate has no business logic and no infrastructure dependencies.
//! It defines the data shapes passed between the core, infra, and API layers.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod persona;
