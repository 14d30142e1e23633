// src/detection/mod.rs
//
// Waste-image advisory pipeline: two sequential inference calls, then the
// chat pipeline with a fixed instructional query, then JSON normalization.

pub mod client;

pub use client::{DetectionClient, DetectionError, InferenceBackend};

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::chat::ChatService;
use crate::llm::{normalize_payload, Advisory};
use crate::search::Document;

/// Fixed query sent with the classification context. Pins the JSON object
/// shape the model is asked to emit.
const ADVISORY_QUERY: &str = "Based on the trash segregation and object identification results above, \
identify the object, what type of waste it is, and how it should be disposed of in an \
environmentally friendly way. Respond with a single JSON object and nothing else, using exactly \
these keys: \"litter_type\" (string), \"confidence\" (number between 0 and 1), \"quantity\" \
(integer), \"recyclability\" (string), \"hazard_level\" (one of \"low\", \"medium\", \"high\"), \
\"recommendations\" (array of strings with concrete disposal steps), \"environmental_impact\" \
(string).";

/// Reply for an advisory request: a stage-failure string, or the
/// normalized model output (parsed object or error shape).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AdvisoryResponse {
    Text(String),
    Structured(Advisory),
}

pub struct AdvisoryService {
    backend: Arc<dyn InferenceBackend>,
    segregation_model: String,
    object_model: String,
    chat: Arc<ChatService>,
}

impl AdvisoryService {
    pub fn new(
        backend: Arc<dyn InferenceBackend>,
        segregation_model: String,
        object_model: String,
        chat: Arc<ChatService>,
    ) -> Self {
        Self {
            backend,
            segregation_model,
            object_model,
            chat,
        }
    }

    /// Classifies an image and turns the raw results into an advisory.
    ///
    /// The two inference calls run sequentially; the first failure
    /// short-circuits with a plain error string and nothing further is
    /// invoked, the model included.
    pub async fn classify_and_advise(&self, image: &[u8], identity: &str) -> AdvisoryResponse {
        let segregation = match self.backend.infer(&self.segregation_model, image).await {
            Ok(value) => value,
            Err(err) => {
                warn!("trash segregation failed: {}", err);
                return AdvisoryResponse::Text("Error in trash detection.".to_string());
            }
        };
        debug!("segregation result: {}", segregation);

        let object = match self.backend.infer(&self.object_model, image).await {
            Ok(value) => value,
            Err(err) => {
                warn!("object identification failed: {}", err);
                return AdvisoryResponse::Text("Error in object identification.".to_string());
            }
        };
        debug!("object identification result: {}", object);

        let context = format!(
            "Trash segregation result: {}, Object identification result: {}",
            segregation, object
        );
        let docs = [Document::from_content(context)];
        let answer = self.chat.respond(identity, ADVISORY_QUERY, &docs).await;

        AdvisoryResponse::Structured(normalize_payload(&answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::session::{ChatMessage, SessionStore};
    use crate::llm::{LlmError, TextGenerator};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex as StdMutex;

    struct StubBackend {
        fail_on: Option<&'static str>,
        calls: StdMutex<Vec<String>>,
    }

    #[async_trait]
    impl InferenceBackend for StubBackend {
        async fn infer(
            &self,
            model_id: &str,
            _image: &[u8],
        ) -> Result<serde_json::Value, DetectionError> {
            self.calls.lock().unwrap().push(model_id.to_string());
            if self.fail_on == Some(model_id) {
                return Err(DetectionError::MissingApiKey);
            }
            Ok(json!({"predictions": [model_id]}))
        }
    }

    struct StubGenerator {
        reply: &'static str,
        calls: StdMutex<usize>,
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, _messages: &[ChatMessage]) -> Result<String, LlmError> {
            *self.calls.lock().unwrap() += 1;
            Ok(self.reply.to_string())
        }
    }

    fn advisory_service(
        fail_on: Option<&'static str>,
        reply: &'static str,
    ) -> (AdvisoryService, Arc<StubBackend>, Arc<StubGenerator>) {
        let backend = Arc::new(StubBackend {
            fail_on,
            calls: StdMutex::new(Vec::new()),
        });
        let generator = Arc::new(StubGenerator {
            reply,
            calls: StdMutex::new(0),
        });
        let chat = Arc::new(ChatService::new(
            generator.clone(),
            Arc::new(SessionStore::new(8)),
        ));
        let service = AdvisoryService::new(
            backend.clone(),
            "segregation/1".to_string(),
            "object/1".to_string(),
            chat,
        );
        (service, backend, generator)
    }

    #[tokio::test]
    async fn segregation_failure_short_circuits() {
        let (service, backend, generator) = advisory_service(Some("segregation/1"), "{}");

        let response = service.classify_and_advise(b"img", "alice").await;
        match response {
            AdvisoryResponse::Text(msg) => assert_eq!(msg, "Error in trash detection."),
            other => panic!("expected text error, got {:?}", other),
        }

        // Second model and the LLM were never invoked.
        assert_eq!(*backend.calls.lock().unwrap(), vec!["segregation/1"]);
        assert_eq!(*generator.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn object_failure_reports_second_stage() {
        let (service, backend, generator) = advisory_service(Some("object/1"), "{}");

        let response = service.classify_and_advise(b"img", "alice").await;
        match response {
            AdvisoryResponse::Text(msg) => assert_eq!(msg, "Error in object identification."),
            other => panic!("expected text error, got {:?}", other),
        }
        assert_eq!(
            *backend.calls.lock().unwrap(),
            vec!["segregation/1", "object/1"]
        );
        assert_eq!(*generator.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn success_normalizes_model_output() {
        let (service, _, _) =
            advisory_service(None, "```json\n{\"litter_type\":\"plastic\"}\n```");

        let response = service.classify_and_advise(b"img", "alice").await;
        let serialized = serde_json::to_value(&response).unwrap();
        assert_eq!(serialized, json!({"litter_type": "plastic"}));
    }

    #[tokio::test]
    async fn non_json_reply_becomes_error_shape() {
        let (service, _, _) = advisory_service(None, "just throw it away");

        let response = service.classify_and_advise(b"img", "alice").await;
        let serialized = serde_json::to_value(&response).unwrap();
        assert_eq!(
            serialized,
            json!({"error": "Invalid JSON response", "raw_response": "just throw it away"})
        );
    }
}
