// src/config/llm.rs
// Gemini chat-completion configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key; generation degrades to the fallback answer when absent.
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_secs: u64,
    /// Low bounded retry count on transient upstream failures.
    pub max_retries: u32,
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: super::helpers::env_opt("GEMINI_API_KEY"),
            model: super::helpers::env_or("GEMINI_MODEL", "gemini-2.5-flash-lite"),
            timeout_secs: super::helpers::env_parsed("GEMINI_TIMEOUT_SECS", 60),
            max_retries: super::helpers::env_parsed("GEMINI_MAX_RETRIES", 2),
        }
    }
}
