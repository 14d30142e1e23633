// src/api/http/health.rs
//
// Unauthenticated liveness probe.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct TestResponse {
    message: &'static str,
}

/// GET /test
pub async fn test_endpoint() -> Json<TestResponse> {
    Json(TestResponse {
        message: "Test endpoint working",
    })
}
