// src/auth/extractor.rs
//
// Bearer-credential extractor for authenticated routes. Clients have been
// observed sending tokens with trailing newlines and stray control bytes,
// so the raw header is cleaned before verification.

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use std::sync::Arc;

use crate::auth::jwt;
use crate::error::ApiError;
use crate::state::AppState;

/// The verified caller identity (token subject).
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Unauthenticated)?
            .trim();

        // Scheme match is case-sensitive: exactly "Bearer" and one space.
        let token = raw
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthenticated)?;
        let token: String = token.trim().chars().filter(|c| !c.is_control()).collect();

        let secret = state
            .config
            .auth
            .jwt_secret
            .as_deref()
            .ok_or(ApiError::JwtSecretMissing)?;

        let user_id = jwt::verify_subject(&token, secret)?;
        Ok(AuthUser { user_id })
    }
}
