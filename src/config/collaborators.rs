// src/config/collaborators.rs
// Configuration for the external search and image-inference collaborators

use serde::{Deserialize, Serialize};

/// Google Custom Search configuration. Missing credentials are not an
/// error; the search client returns empty results instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub api_key: Option<String>,
    pub engine_id: Option<String>,
    pub num_results: usize,
    pub timeout_secs: u64,
}

impl SearchConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: super::helpers::env_opt("GOOGLE_API_KEY"),
            engine_id: super::helpers::env_opt("GCS_SEARCH_ENGINE_ID"),
            num_results: super::helpers::env_parsed("SEARCH_NUM_RESULTS", 5),
            timeout_secs: super::helpers::env_parsed("SEARCH_TIMEOUT_SECS", 10),
        }
    }
}

/// Serverless image-inference configuration. Two hosted models run against
/// each uploaded image: waste segregation, then object identification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub segregation_model: String,
    pub object_model: String,
    pub timeout_secs: u64,
}

impl DetectionConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: super::helpers::env_opt("ROBOFLOW_API_KEY"),
            api_url: super::helpers::env_or("INFERENCE_API_URL", "https://serverless.roboflow.com"),
            segregation_model: super::helpers::env_or(
                "SEGREGATION_MODEL_ID",
                "waste-segregation-d2vj9/5",
            ),
            object_model: super::helpers::env_or("OBJECT_MODEL_ID", "trash-detection-ujrn0/1"),
            timeout_secs: super::helpers::env_parsed("INFERENCE_TIMEOUT_SECS", 30),
        }
    }
}
