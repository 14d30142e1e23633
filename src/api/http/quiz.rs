// src/api/http/quiz.rs

use axum::extract::State;
use axum::Json;
use std::sync::Arc;
use tracing::debug;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /quiz-bot — raw quiz text, nominally a JSON array of questions.
pub async fn quiz_bot(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<Json<String>, ApiError> {
    debug!(subject = %user.user_id, "quiz request");

    let questions = state
        .quiz
        .generate()
        .await
        .map_err(|e| ApiError::Internal(format!("Error processing quiz questions: {}", e)))?;

    Ok(Json(questions))
}
