//! Gemini provider: reqwest client and wire types.

pub mod client;
pub mod types;

pub use client::GeminiClient;
