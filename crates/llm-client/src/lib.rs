//! Text-generation client used to turn user input into movie titles.
//!
//! This crate provides a Rust client for the Gemini `generateContent`
//! endpoint. It handles:
//! - Building the fixed recommendation prompt
//! - Sending it with the configured sampling parameters
//! - Mapping every failure onto a typed `ExtractionError`
//! - Parsing the generated text into `MovieTitle`s via the `pipeline` crate

pub mod config;
pub mod wire;

use async_trait::async_trait;
use movie_types::{MAX_TITLES, MovieTitle};
use pipeline::TitleExtractor;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, instrument};

pub use config::GeminiConfig;
use wire::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};

/// Errors that can occur when asking the generation service for titles
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Request to generation service failed: {0}")]
    Transport(String),

    #[error("Generation service responded with status {status}")]
    Rejected { status: u16 },

    #[error("No recommendations found")]
    NoCandidates,

    #[error("Invalid response from generation service: {0}")]
    Malformed(String),

    #[error("No movie titles found in generated text")]
    NoTitles,
}

/// Anything that can turn free-form input into an ordered list of titles.
#[async_trait]
pub trait TitleSource: Send + Sync {
    /// Returns between 1 and `MAX_TITLES` titles, or a typed failure.
    async fn extract(&self, text: &str) -> Result<Vec<MovieTitle>, ExtractionError>;
}

/// Build the recommendation prompt for a piece of user input.
pub fn build_prompt(user_input: &str) -> String {
    format!(
        r#"Based on the following input: "{user_input}"

Please recommend exactly {MAX_TITLES} movies. Analyze the input and provide relevant movie recommendations.

Format your response exactly like this (movie title only, no year or description):
1. Movie Title
2. Movie Title
3. Movie Title
4. Movie Title
5. Movie Title

Only provide the {MAX_TITLES} numbered movie titles, nothing else."#
    )
}

/// Pull the generated text out of a raw response body.
pub fn parse_generated_text(body: &[u8]) -> Result<String, ExtractionError> {
    let response: GenerateContentResponse = serde_json::from_slice(body)
        .map_err(|e| ExtractionError::Malformed(e.to_string()))?;

    if response.candidates.is_empty() {
        return Err(ExtractionError::NoCandidates);
    }

    response
        .first_text()
        .map(str::to_string)
        .ok_or_else(|| ExtractionError::Malformed("candidate has no text part".into()))
}

/// Client for the Gemini generation service.
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
    extractor: TitleExtractor,
}

impl GeminiClient {
    /// Create a client from configuration.
    ///
    /// No request is made until `extract` is called.
    pub fn new(config: GeminiConfig) -> Result<Self, ExtractionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ExtractionError::Client(e.to_string()))?;

        Ok(Self {
            http,
            config,
            extractor: TitleExtractor::new(),
        })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn request_body(&self, prompt: String) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::text(prompt)],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_output_tokens,
                top_p: self.config.top_p,
                top_k: self.config.top_k,
            },
        }
    }

    /// Send a prompt and return the generated text.
    #[instrument(skip(self, prompt), fields(model = %self.config.model))]
    pub async fn generate(&self, prompt: String) -> Result<String, ExtractionError> {
        let body = self.request_body(prompt);

        let response = self
            .http
            .post(self.config.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                // The URL carries the API key; keep it out of logs and messages.
                let e = e.without_url();
                error!("Generation request failed: {}", e);
                ExtractionError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Generation service responded with status {}", status);
            return Err(ExtractionError::Rejected {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ExtractionError::Transport(e.without_url().to_string()))?;

        let text = parse_generated_text(&bytes)?;
        debug!("Generated {} bytes of text", text.len());
        Ok(text)
    }
}

#[async_trait]
impl TitleSource for GeminiClient {
    async fn extract(&self, text: &str) -> Result<Vec<MovieTitle>, ExtractionError> {
        let content = self.generate(build_prompt(text)).await?;

        let titles = self.extractor.extract(&content);
        if titles.is_empty() {
            return Err(ExtractionError::NoTitles);
        }

        info!("Extracted {} titles", titles.len());
        Ok(titles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    // ============================================================================
    // Mock generation service
    // ============================================================================

    #[derive(Default)]
    struct Captured {
        key: Option<String>,
        body: Option<Value>,
    }

    /// Start a mock generation service on a random port that always answers
    /// with `status` and `body`.
    async fn start_mock_gemini(
        status: StatusCode,
        body: Value,
    ) -> (String, Arc<Mutex<Captured>>, tokio::task::JoinHandle<()>) {
        let captured = Arc::new(Mutex::new(Captured::default()));
        let seen = captured.clone();

        let app = Router::new().route(
            "/v1beta/models/*action",
            post(
                move |axum::extract::Query(params): axum::extract::Query<HashMap<String, String>>,
                      Json(request): Json<Value>| {
                    let body = body.clone();
                    let seen = seen.clone();
                    async move {
                        let mut seen = seen.lock().unwrap();
                        seen.key = params.get("key").cloned();
                        seen.body = Some(request);
                        (status, Json(body))
                    }
                },
            ),
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock generation service");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock generation service failed");
        });

        (format!("http://{}", addr), captured, handle)
    }

    fn generated(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }], "role": "model" },
                "finishReason": "STOP"
            }]
        })
    }

    fn client_for(base_url: String) -> GeminiClient {
        GeminiClient::new(GeminiConfig {
            base_url,
            api_key: "test-key".to_string(),
            ..GeminiConfig::default()
        })
        .expect("Failed to build client")
    }

    // ============================================================================
    // Unit Tests
    // ============================================================================

    #[test]
    fn test_prompt_embeds_input_and_format() {
        let prompt = build_prompt("time travel stories");

        assert!(prompt.contains("\"time travel stories\""));
        assert!(prompt.contains("recommend exactly 5 movies"));
        assert!(prompt.contains("5. Movie Title"));
    }

    #[test]
    fn test_parse_generated_text() {
        let body = generated("1. Looper").to_string();
        assert_eq!(parse_generated_text(body.as_bytes()).unwrap(), "1. Looper");
    }

    #[test]
    fn test_parse_without_candidates() {
        let body = json!({ "promptFeedback": { "blockReason": "SAFETY" } }).to_string();
        assert_eq!(
            parse_generated_text(body.as_bytes()),
            Err(ExtractionError::NoCandidates)
        );
    }

    #[test]
    fn test_parse_candidate_without_text() {
        let body = json!({ "candidates": [{ "finishReason": "SAFETY" }] }).to_string();
        assert!(matches!(
            parse_generated_text(body.as_bytes()),
            Err(ExtractionError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            parse_generated_text(b"<html>bad gateway</html>"),
            Err(ExtractionError::Malformed(_))
        ));
    }

    // ============================================================================
    // Tests against a mock service
    // ============================================================================

    #[tokio::test]
    async fn test_extract_returns_cleaned_titles() {
        let text = "1. Back to the Future (1985)\n2. Looper\n3. Primer\n4. 12 Monkeys\n5. Predestination";
        let (addr, _, handle) = start_mock_gemini(StatusCode::OK, generated(text)).await;

        let titles = client_for(addr).extract("time travel stories").await.unwrap();
        let titles: Vec<&str> = titles.iter().map(MovieTitle::as_str).collect();

        assert_eq!(
            titles,
            vec!["Back to the Future", "Looper", "Primer", "12 Monkeys", "Predestination"]
        );

        handle.abort();
    }

    #[tokio::test]
    async fn test_request_carries_key_prompt_and_sampling() {
        let (addr, captured, handle) = start_mock_gemini(StatusCode::OK, generated("1. Primer")).await;

        client_for(addr).extract("time travel stories").await.unwrap();

        let captured = captured.lock().unwrap();
        assert_eq!(captured.key.as_deref(), Some("test-key"));

        let body = captured.body.as_ref().expect("request body recorded");
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("time travel stories"));

        let generation = &body["generationConfig"];
        assert_eq!(generation["maxOutputTokens"], 500);
        assert_eq!(generation["topK"], 20);
        assert!((generation["temperature"].as_f64().unwrap() - 0.8).abs() < 1e-6);
        assert!((generation["topP"].as_f64().unwrap() - 0.9).abs() < 1e-6);

        handle.abort();
    }

    #[tokio::test]
    async fn test_server_error_is_rejected() {
        let (addr, _, handle) =
            start_mock_gemini(StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": "boom" })).await;

        let result = client_for(addr).extract("anything").await;
        assert_eq!(result, Err(ExtractionError::Rejected { status: 500 }));

        handle.abort();
    }

    #[tokio::test]
    async fn test_text_without_titles() {
        let (addr, _, handle) =
            start_mock_gemini(StatusCode::OK, generated("I cannot recommend movies.")).await;

        let result = client_for(addr).extract("anything").await;
        assert_eq!(result, Err(ExtractionError::NoTitles));

        handle.abort();
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        // Bind and immediately drop a listener to get a port nobody serves.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = client_for(format!("http://{}", addr)).extract("anything").await;
        match result {
            Err(ExtractionError::Transport(message)) => assert!(!message.contains("test-key")),
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}
