//! Recommendation endpoints: thin plumbing around the engine.
//!
//! Handlers parse the request, run analyze → generate → compose with a
//! per-request rng, assign opaque ids, persist the session record, and
//! return the engine's output verbatim.

use axum::{extract::State, Json};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::analyzer::StoryAnalysis;
use crate::engine::{analyze_story, compose_narratives, generate_designs};
use crate::errors::AppError;
use crate::models::design::PremiumDesign;
use crate::models::story::{Preferences, StoryInput, StoryRecommendationRequest};
use crate::state::AppState;
use crate::store::SessionRecord;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct StoryInsights {
    pub themes: Vec<String>,
    pub style_match: String,
    pub emotional_connection: usize,
    pub personalization_level: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StoryRecommendationResponse {
    pub session_id: String,
    pub suggestions: Vec<PremiumDesign>,
    pub message: String,
    pub story_insights: StoryInsights,
    pub personalization_score: u32,
}

#[derive(Debug, Serialize)]
pub struct PreferenceResponse {
    pub session_id: String,
    pub suggestions: Vec<PremiumDesign>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ShortlistRequest {
    pub design_id: Option<String>,
    pub user_session: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ShortlistResponse {
    pub message: String,
    pub collection_status: &'static str,
    pub next_steps: &'static str,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub diamond_shapes: Vec<&'static str>,
    pub premium_metals: Vec<&'static str>,
    pub story_themes: Vec<&'static str>,
    pub budget_ranges: Vec<&'static str>,
    pub occasions: Vec<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/story-recommendations
pub async fn handle_story_recommendations(
    State(state): State<AppState>,
    Json(request): Json<StoryRecommendationRequest>,
) -> Result<Json<StoryRecommendationResponse>, AppError> {
    let mut rng = StdRng::from_entropy();

    let analysis = analyze_story(&state.knowledge, &request.story);
    info!(
        "Story analyzed: {} themes, {} emotional keywords",
        analysis.themes.len(),
        analysis.emotional_keywords.len()
    );

    let suggestions = run_pipeline(
        &state,
        &analysis,
        &request.story,
        &request.preferences,
        &mut rng,
    );

    let theme_names: Vec<String> = analysis
        .themes
        .iter()
        .map(|t| t.as_str().to_string())
        .collect();

    let message = format!(
        "Based on your beautiful love story, we've crafted three exceptional pieces that \
         capture the essence of your journey. Each design reflects the {} elements that \
         make your relationship unique.",
        theme_names
            .iter()
            .take(2)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    );

    let story_insights = StoryInsights {
        themes: theme_names.clone(),
        style_match: style_match_label(&analysis),
        emotional_connection: analysis.emotional_keywords.len(),
        personalization_level: "High",
    };

    let personalization_score = personalization_score(&analysis);

    let session_id = new_session_id(&mut rng);
    state
        .sessions
        .put(
            session_id.clone(),
            SessionRecord {
                story: Some(request.story),
                preferences: request.preferences,
                themes: theme_names,
                suggestions: suggestions.clone(),
                created_at: Utc::now(),
            },
        )
        .await;
    info!("Stored story session {session_id}");

    Ok(Json(StoryRecommendationResponse {
        session_id,
        suggestions,
        message,
        story_insights,
        personalization_score,
    }))
}

/// POST /api/preferences: preference-only recommendations. An empty story
/// yields the default element sets, so the same pipeline applies.
pub async fn handle_preferences(
    State(state): State<AppState>,
    Json(preferences): Json<Preferences>,
) -> Result<Json<PreferenceResponse>, AppError> {
    let mut rng = StdRng::from_entropy();

    let story = StoryInput::default();
    let analysis = analyze_story(&state.knowledge, &story);
    let suggestions = run_pipeline(&state, &analysis, &story, &preferences, &mut rng);

    let session_id = new_session_id(&mut rng);
    state
        .sessions
        .put(
            session_id.clone(),
            SessionRecord {
                story: None,
                preferences,
                themes: vec![],
                suggestions: suggestions.clone(),
                created_at: Utc::now(),
            },
        )
        .await;
    info!("Stored preference session {session_id}");

    Ok(Json(PreferenceResponse {
        session_id,
        suggestions,
        message: "Here are three exceptional pieces selected based on your preferences, \
                  each representing the pinnacle of diamond craftsmanship."
            .to_string(),
    }))
}

/// POST /api/shortlist: requires an existing session.
pub async fn handle_shortlist(
    State(state): State<AppState>,
    Json(request): Json<ShortlistRequest>,
) -> Result<Json<ShortlistResponse>, AppError> {
    let session_id = request
        .user_session
        .ok_or_else(|| AppError::Validation("Session ID required".to_string()))?;

    if state.sessions.get(&session_id).await.is_none() {
        return Err(AppError::NotFound(format!("Unknown session {session_id}")));
    }

    info!(
        "Shortlisted design {:?} for session {session_id}",
        request.design_id
    );

    Ok(Json(ShortlistResponse {
        message: "Added to your premium collection! Our diamond specialist will prepare \
                  detailed specifications for your viewing."
            .to_string(),
        collection_status: "premium",
        next_steps: "Schedule private consultation to view piece",
    }))
}

/// GET /api/data/options: discoverable vocabularies, read straight from the
/// knowledge base key sets so the listing can never drift from the engine.
pub async fn handle_options(State(state): State<AppState>) -> Json<OptionsResponse> {
    let kb = &state.knowledge;
    Json(OptionsResponse {
        diamond_shapes: kb.shape_names(),
        premium_metals: kb.metal_names(),
        story_themes: kb.theme_names(),
        budget_ranges: kb.budget_labels(),
        occasions: crate::engine::knowledge::OCCASIONS.to_vec(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn run_pipeline<R: Rng>(
    state: &AppState,
    analysis: &StoryAnalysis,
    story: &StoryInput,
    preferences: &Preferences,
    rng: &mut R,
) -> Vec<PremiumDesign> {
    let candidates = generate_designs(&state.knowledge, analysis, story, preferences, rng);
    let candidates = compose_narratives(candidates, analysis, story, rng);
    candidates
        .iter()
        .map(|c| PremiumDesign::from_candidate(new_design_id(rng), c))
        .collect()
}

fn style_match_label(analysis: &StoryAnalysis) -> String {
    match analysis.themes.first() {
        Some(theme) => format!("{} Romance", title_case(theme.as_str())),
        None => "Classic Elegance".to_string(),
    }
}

fn personalization_score(analysis: &StoryAnalysis) -> u32 {
    let score = analysis.themes.len() * 25 + analysis.emotional_keywords.len() * 10;
    score.min(100) as u32
}

fn new_session_id<R: Rng>(rng: &mut R) -> String {
    format!("lumiere_{}", rng.gen_range(10_000..=99_999))
}

fn new_design_id<R: Rng>(rng: &mut R) -> String {
    format!(
        "lumiere_{}_{}",
        rng.gen_range(1_000..=9_999),
        Utc::now().format("%H%M%S")
    )
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
