//! Wire types for the Gemini `generateContent` REST API.
//!
//! Field names follow the v1beta JSON shapes (camelCase). Only the fields
//! this service uses are modeled; unknown response fields are ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiContent>,
    pub contents: Vec<GeminiContent>,
    pub generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiContent {
    /// "user" or "model"; absent on system instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiPart {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    pub usage_metadata: Option<GeminiUsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    pub content: Option<GeminiContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiUsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GeminiRequest {
            system_instruction: Some(GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: "You are a mentor.".to_string(),
                }],
            }),
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: "hello".to_string(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: 0.7,
                top_p: 0.95,
                top_k: 40,
                max_output_tokens: 4096,
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("systemInstruction").is_some());
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 4096);
        assert_eq!(json["generationConfig"]["topK"], 40);
        assert_eq!(json["contents"][0]["role"], "user");
        // System instruction carries no role field
        assert!(json["systemInstruction"].get("role").is_none());
    }

    #[test]
    fn test_response_parses_candidates_and_usage() {
        let body = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"text": "Hello "}, {"text": "there!"}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {
                "promptTokenCount": 12,
                "candidatesTokenCount": 34,
                "totalTokenCount": 46
            },
            "modelVersion": "gemini-1.5-pro-002"
        }"#;

        let response: GeminiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.candidates.len(), 1);
        let candidate = &response.candidates[0];
        assert_eq!(candidate.finish_reason.as_deref(), Some("STOP"));
        assert_eq!(candidate.content.as_ref().unwrap().parts.len(), 2);
        let usage = response.usage_metadata.unwrap();
        assert_eq!(usage.prompt_token_count, 12);
        assert_eq!(usage.candidates_token_count, 34);
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let response: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(response.candidates.is_empty());
        assert!(response.usage_metadata.is_none());
    }
}
