// src/lib.rs

pub mod api;
pub mod auth;
pub mod chat;
pub mod config;
pub mod detection;
pub mod error;
pub mod llm;
pub mod quiz;
pub mod search;
pub mod state;

pub use config::EcosageConfig;
pub use error::ApiError;
pub use state::AppState;
