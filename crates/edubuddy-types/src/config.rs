//! Application configuration types.
//!
//! Deserialized from `config.toml` in the data directory; every field has a
//! default so a missing or partial file still yields a working configuration.

use serde::{Deserialize, Serialize};

/// Generation parameters passed to the model on every completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Model identifier (e.g. "gemini-1.5-pro").
    pub model: String,
    /// Balanced creativity and coherence.
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-pro".to_string(),
            temperature: 0.7,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 4096,
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Database URL; when absent, a local SQLite file in the data directory
    /// is used instead.
    pub database_url: Option<String>,
    pub generation: GenerationSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_defaults_match_service_constants() {
        let settings = GenerationSettings::default();
        assert_eq!(settings.model, "gemini-1.5-pro");
        assert_eq!(settings.temperature, 0.7);
        assert_eq!(settings.top_p, 0.95);
        assert_eq!(settings.top_k, 40);
        assert_eq!(settings.max_output_tokens, 4096);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
[generation]
model = "gemini-1.5-flash"
"#,
        )
        .unwrap();
        assert!(config.database_url.is_none());
        assert_eq!(config.generation.model, "gemini-1.5-flash");
        assert_eq!(config.generation.max_output_tokens, 4096);
    }
}
