// src/api/http/ask.rs

use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    /// Kept for request compatibility; the token subject is authoritative.
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// POST /ask — search-grounded, session-aware chat.
pub async fn ask_bot(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(request): Json<QueryRequest>,
) -> Json<AskResponse> {
    debug!(
        subject = %user.user_id,
        body_user = %request.user_id,
        "ask: {}",
        request.query
    );

    let results = state.search.search(&request.query).await;
    let answer = state
        .chat
        .respond(&user.user_id, &request.query, &results)
        .await;

    Json(AskResponse { answer })
}
