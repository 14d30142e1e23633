//! Serverless image-inference client. The hosted API takes the image as a
//! base64 body and returns model-specific JSON that this service treats as
//! opaque context for the advisory prompt.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::config::DetectionConfig;

#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("ROBOFLOW_API_KEY not set")]
    MissingApiKey,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("inference API error: {status} - {body}")]
    Api { status: StatusCode, body: String },
}

/// Seam over the hosted inference API so the advisory pipeline can be
/// exercised without the network.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn infer(&self, model_id: &str, image: &[u8]) -> Result<Value, DetectionError>;
}

pub struct DetectionClient {
    client: Client,
    api_key: Option<String>,
    api_url: String,
    timeout: Duration,
}

impl DetectionClient {
    pub fn new(config: &DetectionConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

#[async_trait]
impl InferenceBackend for DetectionClient {
    async fn infer(&self, model_id: &str, image: &[u8]) -> Result<Value, DetectionError> {
        let api_key = self.api_key.as_deref().ok_or(DetectionError::MissingApiKey)?;
        let url = format!("{}/{}?api_key={}", self.api_url, model_id, api_key);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(BASE64.encode(image))
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DetectionError::Api { status, body });
        }

        Ok(response.json().await?)
    }
}
