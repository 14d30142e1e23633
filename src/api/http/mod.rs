// src/api/http/mod.rs

mod ask;
mod classify;
mod health;
mod quiz;

pub use ask::{AskResponse, QueryRequest};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/test", get(health::test_endpoint))
        .route("/ask", post(ask::ask_bot))
        .route("/classify-trash", post(classify::classify_trash))
        .route("/quiz-bot", post(quiz::quiz_bot))
        .with_state(state)
}
