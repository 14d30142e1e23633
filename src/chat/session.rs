// src/chat/session.rs
//
// Per-user conversation history. Sessions live in a bounded LRU cache so a
// long-running process cannot accumulate unbounded per-caller state; each
// entry carries its own async mutex so concurrent requests from one caller
// serialize while unrelated callers never contend.

use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single conversation turn. Sequence order is chronological.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

pub type SessionHandle = Arc<Mutex<Vec<ChatMessage>>>;

pub struct SessionStore {
    sessions: Mutex<LruCache<String, SessionHandle>>,
}

impl SessionStore {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            sessions: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Returns the session for an identity, creating an empty one on first
    /// use. Touching a session marks it most recently used; the coldest
    /// session is dropped once capacity is reached.
    pub async fn get_or_create(&self, identity: &str) -> SessionHandle {
        let mut sessions = self.sessions.lock().await;
        if let Some(handle) = sessions.get(identity) {
            return handle.clone();
        }
        let handle: SessionHandle = Arc::new(Mutex::new(Vec::new()));
        sessions.put(identity.to_string(), handle.clone());
        handle
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
