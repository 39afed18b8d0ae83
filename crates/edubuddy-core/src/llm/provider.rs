//! LlmProvider trait definition.
//!
//! The core abstraction over generative-language backends. Uses native
//! async fn in traits (RPITIT, Rust 2024 edition). Implementations live in
//! edubuddy-infra (e.g. `GeminiClient`).

use edubuddy_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for generative-language provider backends.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g. "gemini").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
