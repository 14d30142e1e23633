// src/state.rs

use std::sync::Arc;

use crate::chat::session::SessionStore;
use crate::chat::ChatService;
use crate::config::EcosageConfig;
use crate::detection::{AdvisoryService, DetectionClient};
use crate::llm::GeminiClient;
use crate::quiz::QuizService;
use crate::search::SearchClient;

/// Shared per-process state: configuration plus the service graph.
pub struct AppState {
    pub config: EcosageConfig,
    pub search: SearchClient,
    pub chat: Arc<ChatService>,
    pub advisory: AdvisoryService,
    pub quiz: QuizService,
}

impl AppState {
    pub fn new(config: EcosageConfig) -> Self {
        let llm = Arc::new(GeminiClient::new(&config.gemini));
        let sessions = Arc::new(SessionStore::new(config.session.capacity));
        let chat = Arc::new(ChatService::new(llm.clone(), sessions));

        let search = SearchClient::new(&config.search);
        let advisory = AdvisoryService::new(
            Arc::new(DetectionClient::new(&config.detection)),
            config.detection.segregation_model.clone(),
            config.detection.object_model.clone(),
            chat.clone(),
        );
        let quiz = QuizService::new(llm);

        Self {
            config,
            search,
            chat,
            advisory,
            quiz,
        }
    }
}
