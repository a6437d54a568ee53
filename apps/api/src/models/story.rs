#![allow(dead_code)]

//! Request-side wire types: the customer's story fields and declared
//! preferences. Every field is optional: absence means "no signal", never
//! an error.

use serde::{Deserialize, Serialize};

/// Free-text story fields. Occasion and timeline are collected for the
/// session record but do not feed theme detection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoryInput {
    pub love_story: Option<String>,
    pub personality: Option<String>,
    pub style_preferences: Option<String>,
    pub special_moments: Option<String>,
    pub occasion: Option<String>,
    pub timeline: Option<String>,
}

/// Declared preferences. `metal_type` overrides the recommended-metal pick;
/// `budget_range` is a label resolved through the knowledge base's fixed
/// interval table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub ring_type: Option<String>,
    pub center_stone: Option<String>,
    pub metal_type: Option<String>,
    pub budget_range: Option<String>,
    pub design_inspiration: Option<String>,
}

/// POST /api/story-recommendations request body.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryRecommendationRequest {
    pub story: StoryInput,
    pub preferences: Preferences,
    #[serde(rename = "type", default = "default_request_type")]
    pub request_type: String,
}

fn default_request_type() -> String {
    "story_based".to_string()
}
