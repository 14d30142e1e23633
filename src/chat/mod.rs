// src/chat/mod.rs

pub mod prompt;
pub mod session;

use std::sync::Arc;
use tracing::warn;

use crate::llm::TextGenerator;
use crate::search::Document;
use session::{ChatMessage, SessionStore};

/// Answer returned when generation fails or produces nothing usable. The
/// route still answers 200; callers cannot treat 200 as business success.
pub const NO_RESPONSE_FALLBACK: &str = "No response from Gemini API.";

pub struct ChatService {
    llm: Arc<dyn TextGenerator>,
    sessions: Arc<SessionStore>,
}

impl ChatService {
    pub fn new(llm: Arc<dyn TextGenerator>, sessions: Arc<SessionStore>) -> Self {
        Self { llm, sessions }
    }

    /// Answers a query with retrieved context and the caller's history.
    ///
    /// The identity's session lock is held across the model call, so
    /// concurrent requests from the same caller serialize and the history
    /// append order is well defined. The user/assistant pair is appended
    /// only after generation succeeds.
    pub async fn respond(&self, identity: &str, query: &str, docs: &[Document]) -> String {
        let session = self.sessions.get_or_create(identity).await;
        let mut history = session.lock().await;

        let messages = prompt::build_messages(&history, docs, query);
        match self.llm.generate(&messages).await {
            Ok(answer) => {
                history.push(ChatMessage::user(query));
                history.push(ChatMessage::assistant(answer.clone()));
                answer
            }
            Err(err) => {
                warn!("generation failed for this request: {}", err);
                NO_RESPONSE_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;

    /// Records every message sequence it is asked to complete.
    struct ScriptedGenerator {
        reply: Option<String>,
        requests: StdMutex<Vec<Vec<ChatMessage>>>,
    }

    impl ScriptedGenerator {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                requests: StdMutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                requests: StdMutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
            self.requests.lock().unwrap().push(messages.to_vec());
            match &self.reply {
                Some(reply) => Ok(reply.clone()),
                None => Err(LlmError::EmptyResponse),
            }
        }
    }

    fn service(generator: Arc<ScriptedGenerator>) -> ChatService {
        ChatService::new(generator, Arc::new(SessionStore::new(8)))
    }

    #[tokio::test]
    async fn appends_pair_after_success() {
        let generator = Arc::new(ScriptedGenerator::replying("sure"));
        let chat = service(generator.clone());

        let answer = chat.respond("alice", "first", &[]).await;
        assert_eq!(answer, "sure");
        chat.respond("alice", "second", &[]).await;

        // Third call sees system + two prior pairs + the new question.
        chat.respond("alice", "third", &[]).await;
        let requests = generator.requests.lock().unwrap();
        assert_eq!(requests[2].len(), 1 + 2 * 2 + 1);
        assert_eq!(requests[2][1], ChatMessage::user("first"));
        assert_eq!(requests[2][2], ChatMessage::assistant("sure"));
        assert_eq!(requests[2][3], ChatMessage::user("second"));
    }

    #[tokio::test]
    async fn failure_yields_fallback_and_no_history() {
        let generator = Arc::new(ScriptedGenerator::failing());
        let chat = service(generator.clone());

        let answer = chat.respond("alice", "first", &[]).await;
        assert_eq!(answer, NO_RESPONSE_FALLBACK);

        // History stayed empty: the next request carries no prior turns.
        chat.respond("alice", "second", &[]).await;
        let requests = generator.requests.lock().unwrap();
        assert_eq!(requests[1].len(), 2);
    }

    #[tokio::test]
    async fn histories_are_per_identity() {
        let generator = Arc::new(ScriptedGenerator::replying("ok"));
        let chat = service(generator.clone());

        chat.respond("alice", "hers", &[]).await;
        chat.respond("bob", "his", &[]).await;

        let requests = generator.requests.lock().unwrap();
        assert_eq!(requests[1].len(), 2);
        assert!(requests[1][1].content.ends_with("Question: his"));
    }
}
