#![allow(dead_code)]

//! Response-side wire record for a recommended design. The engine's
//! `DesignCandidate` stays id-less and enum-typed; the service layer assigns
//! the opaque id and flattens everything to presentation strings here.

use serde::{Deserialize, Serialize};

use crate::engine::generator::DesignCandidate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PremiumDesign {
    pub id: String,
    pub stone_type: String,
    pub stone_shape: String,
    /// Grade with its descriptive band, e.g. "D (Colorless)".
    pub stone_color: String,
    pub stone_clarity: String,
    pub carat_weight: f64,
    pub metal_type: String,
    pub setting_type: String,
    pub estimated_price: f64,
    pub rationale: String,
    pub story_connection: Option<String>,
    pub style_tags: Vec<String>,
    pub premium_features: Vec<String>,
}

impl PremiumDesign {
    pub fn from_candidate(id: String, candidate: &DesignCandidate) -> Self {
        PremiumDesign {
            id,
            stone_type: "diamond".to_string(),
            stone_shape: candidate.stone_shape.as_str().to_string(),
            stone_color: format_color_grade(candidate.stone_color),
            stone_clarity: candidate.stone_clarity.to_string(),
            carat_weight: candidate.carat_weight,
            metal_type: candidate.metal_type.as_str().to_string(),
            setting_type: candidate.setting_type.to_string(),
            estimated_price: candidate.estimated_price,
            rationale: candidate.rationale.clone().unwrap_or_default(),
            story_connection: candidate.story_connection.clone(),
            style_tags: candidate.style_tags.clone(),
            premium_features: candidate.premium_features.clone(),
        }
    }
}

/// D/E/F are colorless grades; G is near colorless.
fn format_color_grade(grade: &str) -> String {
    if matches!(grade, "D" | "E" | "F") {
        format!("{grade} (Colorless)")
    } else {
        format!("{grade} (Near Colorless)")
    }
}
