// src/llm/mod.rs

pub mod gemini;
pub mod normalize;

pub use gemini::{GeminiClient, LlmError};
pub use normalize::{normalize_payload, strip_code_fences, Advisory};

use async_trait::async_trait;

use crate::chat::session::ChatMessage;

/// Seam over the hosted chat model so the conversation pipeline can be
/// exercised without the network.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, messages: &[ChatMessage]) -> Result<String, LlmError>;
}
