mod config;
mod engine;
mod errors;
mod models;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::engine::knowledge::KnowledgeBase;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::InMemorySessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Lumiere API v{}", env!("CARGO_PKG_VERSION"));

    // Knowledge base is built once and shared read-only with every handler.
    let knowledge = Arc::new(KnowledgeBase::builtin());
    info!(
        "Knowledge base loaded: {} shapes, {} metals, {} themes",
        knowledge.shape_names().len(),
        knowledge.metal_names().len(),
        knowledge.theme_names().len()
    );

    let sessions = Arc::new(InMemorySessionStore::default());
    info!("Session store initialized (in-memory)");

    let state = AppState {
        knowledge,
        sessions,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
