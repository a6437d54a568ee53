//! Session storage: the external key-value seam the engine's output is
//! handed to. The engine never touches it; handlers `put` after generating
//! and `get` when a later call references a session.
//!
//! Carried in `AppState` as `Arc<dyn SessionStore>` so a Redis- or
//! database-backed store can be swapped in without touching handler code.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::models::design::PremiumDesign;
use crate::models::story::{Preferences, StoryInput};

/// Everything persisted for one recommendation session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub story: Option<StoryInput>,
    pub preferences: Preferences,
    pub themes: Vec<String>,
    pub suggestions: Vec<PremiumDesign>,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn put(&self, session_id: String, record: SessionRecord);
    async fn get(&self, session_id: &str) -> Option<SessionRecord>;
}

/// Process-local store. Sessions live until restart.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, SessionRecord>>,
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(&self, session_id: String, record: SessionRecord) {
        self.sessions.write().await.insert(session_id, record);
    }

    async fn get(&self, session_id: &str) -> Option<SessionRecord> {
        self.sessions.read().await.get(session_id).cloned()
    }
}
