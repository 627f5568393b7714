//! Configuration for the text-generation service.

use serde::{Deserialize, Serialize};

/// Connection and sampling settings for Gemini `generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// Base URL of the generation service
    pub base_url: String,

    /// API key, sent as the `key` query parameter
    pub api_key: String,

    /// Model used for generation
    pub model: String,

    pub temperature: f32,
    pub max_output_tokens: u32,
    pub top_p: f32,
    pub top_k: u32,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Full URL of the `generateContent` endpoint for the configured model
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key: String::new(),
            model: "gemini-1.5-flash-latest".to_string(),
            temperature: 0.8,
            max_output_tokens: 500,
            top_p: 0.9,
            top_k: 20,
            timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_and_model() {
        let config = GeminiConfig {
            base_url: "http://127.0.0.1:9000/".to_string(),
            ..GeminiConfig::default()
        };

        assert_eq!(
            config.endpoint(),
            "http://127.0.0.1:9000/v1beta/models/gemini-1.5-flash-latest:generateContent"
        );
    }
}
