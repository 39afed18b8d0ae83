//! GeminiClient -- concrete [`LlmProvider`] implementation for the Gemini API.
//!
//! Sends non-streaming requests to `generateContent` with the API key in the
//! `x-goog-api-key` header. The key is wrapped in [`secrecy::SecretString`]
//! and is never logged or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use edubuddy_core::llm::provider::LlmProvider;
use edubuddy_types::llm::{
    CompletionRequest, CompletionResponse, FinishReason, LlmError, MessageRole, Usage,
};

use super::types::{
    GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest, GeminiResponse,
};

/// Gemini generative-language provider.
///
/// Implements [`LlmProvider`] for the `generateContent` REST endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client.
    pub fn new(api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    /// Convert a generic [`CompletionRequest`] into the Gemini wire shape.
    ///
    /// Gemini uses "model" where the generic types use "assistant"; system
    /// messages in the list are folded into `systemInstruction` alongside the
    /// request's own system field.
    fn to_gemini_request(request: &CompletionRequest) -> GeminiRequest {
        let mut system_text = request.system.clone().unwrap_or_default();
        let mut contents = Vec::with_capacity(request.messages.len());

        for message in &request.messages {
            match message.role {
                MessageRole::System => {
                    if !system_text.is_empty() {
                        system_text.push_str("\n\n");
                    }
                    system_text.push_str(&message.content);
                }
                MessageRole::User => contents.push(GeminiContent {
                    role: Some("user".to_string()),
                    parts: vec![GeminiPart {
                        text: message.content.clone(),
                    }],
                }),
                MessageRole::Assistant => contents.push(GeminiContent {
                    role: Some("model".to_string()),
                    parts: vec![GeminiPart {
                        text: message.content.clone(),
                    }],
                }),
            }
        }

        let system_instruction = (!system_text.is_empty()).then(|| GeminiContent {
            role: None,
            parts: vec![GeminiPart { text: system_text }],
        });

        GeminiRequest {
            system_instruction,
            contents,
            generation_config: GeminiGenerationConfig {
                temperature: request.temperature.unwrap_or(0.7),
                top_p: request.top_p.unwrap_or(0.95),
                top_k: request.top_k.unwrap_or(40),
                max_output_tokens: request.max_output_tokens,
            },
        }
    }

    fn parse_finish_reason(reason: Option<&str>) -> FinishReason {
        match reason {
            Some("STOP") => FinishReason::Stop,
            Some("MAX_TOKENS") => FinishReason::MaxTokens,
            Some("SAFETY") => FinishReason::Safety,
            Some("RECITATION") => FinishReason::Recitation,
            _ => FinishReason::Other,
        }
    }

    /// Map a non-success HTTP status to the matching [`LlmError`].
    fn error_for_status(status: u16, error_body: String) -> LlmError {
        match status {
            400 => LlmError::InvalidRequest(error_body),
            401 | 403 => LlmError::AuthenticationFailed,
            429 => LlmError::RateLimited,
            _ => LlmError::Provider {
                message: format!("HTTP {status}: {error_body}"),
            },
        }
    }

    /// Extract a [`CompletionResponse`] from the decoded wire response.
    ///
    /// Joins all text parts of the first candidate; a response with no
    /// candidates or no text is a deserialization error, since the caller
    /// has nothing to show the user.
    fn parse_response(
        gemini_resp: GeminiResponse,
        model: &str,
    ) -> Result<CompletionResponse, LlmError> {
        let candidate = gemini_resp
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::Deserialization("response has no candidates".to_string()))?;

        let content = candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if content.is_empty() {
            return Err(LlmError::Deserialization(
                "candidate has no text parts".to_string(),
            ));
        }

        let usage = gemini_resp
            .usage_metadata
            .map(|u| Usage {
                prompt_tokens: u.prompt_token_count,
                completion_tokens: u.candidates_token_count,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            content,
            model: model.to_string(),
            finish_reason: Self::parse_finish_reason(candidate.finish_reason.as_deref()),
            usage,
        })
    }
}

// GeminiClient intentionally does NOT derive Debug. The SecretString field
// ensures the API key is never printed, and omitting Debug entirely keeps
// the whole client out of log output.

impl LlmProvider for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = Self::to_gemini_request(request);
        let url = self.url(&request.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Self::error_for_status(status.as_u16(), error_body));
        }

        let gemini_resp: GeminiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        Self::parse_response(gemini_resp, &request.model)
    }
}
