use std::sync::Arc;

use crate::config::Config;
use crate::engine::knowledge::KnowledgeBase;
use crate::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable reference tables. Built once at startup, never mutated.
    pub knowledge: Arc<KnowledgeBase>,
    /// Pluggable session store. Default: in-memory; swap for an external KV.
    pub sessions: Arc<dyn SessionStore>,
    pub config: Config,
}
