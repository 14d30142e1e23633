// src/config/mod.rs
// Central configuration for the ecosage backend

pub mod collaborators;
pub mod helpers;
pub mod llm;
pub mod server;

use serde::{Deserialize, Serialize};

pub use collaborators::{DetectionConfig, SearchConfig};
pub use llm::GeminiConfig;
pub use server::{ServerConfig, SessionConfig};

/// Credential-verification configuration. The secret is optional at load
/// time; authenticated routes fail with a configuration error per request
/// while it is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            jwt_secret: helpers::env_opt("SUPABASE_JWT_SECRET"),
        }
    }
}

/// Main configuration structure - composes all domain configs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcosageConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub gemini: GeminiConfig,
    pub search: SearchConfig,
    pub detection: DetectionConfig,
    pub session: SessionConfig,
}

impl EcosageConfig {
    pub fn from_env() -> Self {
        // Load .env if present (production relies on real env vars)
        dotenvy::dotenv().ok();

        Self {
            server: ServerConfig::from_env(),
            auth: AuthConfig::from_env(),
            gemini: GeminiConfig::from_env(),
            search: SearchConfig::from_env(),
            detection: DetectionConfig::from_env(),
            session: SessionConfig::from_env(),
        }
    }
}
