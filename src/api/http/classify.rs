// src/api/http/classify.rs

use axum::extract::{Multipart, State};
use axum::Json;
use std::sync::Arc;
use tracing::debug;

use crate::auth::AuthUser;
use crate::detection::AdvisoryResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /classify-trash — multipart image upload to structured advisory.
pub async fn classify_trash(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<AdvisoryResponse>, ApiError> {
    let mut image: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Internal(format!("Error processing file: {}", e)))?
    {
        let is_file = field.file_name().is_some() || field.name() == Some("file");
        if !is_file {
            continue;
        }
        debug!(
            name = field.name().unwrap_or(""),
            filename = field.file_name().unwrap_or(""),
            "classify upload"
        );
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::Internal(format!("Error processing file: {}", e)))?;
        image = Some(bytes.to_vec());
        break;
    }

    let Some(image) = image else {
        return Err(ApiError::BadRequest("No file uploaded".to_string()));
    };

    let advisory = state.advisory.classify_and_advise(&image, &user.user_id).await;
    Ok(Json(advisory))
}
