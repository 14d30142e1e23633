//! Gemini chat client.
//!
//! Uses the generateContent API. System messages become the request's
//! systemInstruction; user/assistant turns map to "user"/"model" contents.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

use super::TextGenerator;
use crate::chat::session::{ChatMessage, Role};
use crate::config::GeminiConfig;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("GEMINI_API_KEY not set")]
    MissingApiKey,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Gemini API error: {status} - {body}")]
    Api { status: StatusCode, body: String },

    #[error("Gemini error: {0}")]
    Upstream(String),

    #[error("model returned no content")]
    EmptyResponse,
}

impl LlmError {
    fn is_retryable(&self) -> bool {
        match self {
            LlmError::Api { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            LlmError::Network(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    timeout: Duration,
    max_retries: u32,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            max_retries: config.max_retries,
            base_url: GEMINI_API_BASE.to_string(),
        }
    }

    /// One-shot completion from a bare prompt (no history, no persona).
    pub async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
        self.generate(&[ChatMessage::user(prompt)]).await
    }

    async fn dispatch(&self, request: &GeminiRequest) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        );

        let mut attempt = 0;
        loop {
            match self.send_once(&url, request).await {
                Ok(text) => return Ok(text),
                Err(err) if attempt < self.max_retries && err.is_retryable() => {
                    attempt += 1;
                    warn!(
                        "Gemini call failed (attempt {}/{}), retrying: {}",
                        attempt, self.max_retries, err
                    );
                    tokio::time::sleep(Duration::from_millis(500 * u64::from(attempt))).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn send_once(&self, url: &str, request: &GeminiRequest) -> Result<String, LlmError> {
        let response = self
            .client
            .post(url)
            .json(request)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, body });
        }

        let api_response: GeminiResponse = response.json().await?;

        if let Some(error) = api_response.error {
            return Err(LlmError::Upstream(error.message));
        }

        let mut text = String::new();
        if let Some(candidates) = api_response.candidates {
            if let Some(candidate) = candidates.into_iter().next() {
                for part in candidate.content.parts {
                    if let Some(t) = part.text {
                        text.push_str(&t);
                    }
                }
            }
        }

        if text.is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let mut contents = Vec::new();
        let mut system_parts = Vec::new();

        for msg in messages {
            match msg.role {
                Role::System => system_parts.push(GeminiTextPart {
                    text: msg.content.clone(),
                }),
                Role::User => contents.push(GeminiContent {
                    role: "user".to_string(),
                    parts: vec![GeminiTextPart {
                        text: msg.content.clone(),
                    }],
                }),
                Role::Assistant => contents.push(GeminiContent {
                    role: "model".to_string(),
                    parts: vec![GeminiTextPart {
                        text: msg.content.clone(),
                    }],
                }),
            }
        }

        let request = GeminiRequest {
            contents,
            system_instruction: (!system_parts.is_empty())
                .then_some(GeminiSystemInstruction { parts: system_parts }),
        };

        self.dispatch(&request).await
    }
}

// ============================================================================
// API Types
// ============================================================================

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiSystemInstruction>,
}

#[derive(Serialize)]
struct GeminiSystemInstruction {
    parts: Vec<GeminiTextPart>,
}

#[derive(Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiTextPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiTextPart {
    text: String,
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    error: Option<GeminiError>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct GeminiError {
    message: String,
}
