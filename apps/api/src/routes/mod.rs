pub mod health;
pub mod recommendations;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/story-recommendations",
            post(recommendations::handle_story_recommendations),
        )
        .route("/api/preferences", post(recommendations::handle_preferences))
        .route("/api/shortlist", post(recommendations::handle_shortlist))
        .route("/api/data/options", get(recommendations::handle_options))
        .with_state(state)
}
