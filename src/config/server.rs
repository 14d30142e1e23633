// src/config/server.rs
// Server and session-store configuration

use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: super::helpers::env_or("ECOSAGE_HOST", "0.0.0.0"),
            port: super::helpers::env_parsed("ECOSAGE_PORT", 8000),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Conversation session store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum number of live per-user sessions before LRU eviction.
    pub capacity: usize,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            capacity: super::helpers::env_parsed("SESSION_CACHE_CAPACITY", 512),
        }
    }
}
