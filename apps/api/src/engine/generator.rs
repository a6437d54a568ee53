//! Design generation: orchestrates element selection and pricing across the
//! three generation approaches to produce exactly three candidates.
//!
//! Flow per approach: pick metal/shape → sample carat inside the approach
//! interval, capped by budget → pick clarity/color/setting → price →
//! single-pass budget-fit correction → candidate.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::engine::analyzer::StoryAnalysis;
use crate::engine::knowledge::{KnowledgeBase, Metal, StoneShape};
use crate::engine::pricing::{estimate_price, fit_carat_to_budget, round2, BASE_STONE_PRICE};
use crate::engine::selector::{pick_metal, pick_setting, pick_shape};
use crate::models::story::{Preferences, StoryInput};

/// Setting complexity used for all generated pieces (premium craftsmanship).
const SETTING_COMPLEXITY: f64 = 1.3;
/// Share of the budget ceiling spent when capping the sampled carat.
const INITIAL_BUDGET_SHARE: f64 = 0.8;

const CLARITY_GRADES: [&str; 5] = ["FL", "IF", "VVS1", "VVS2", "VS1"];
const NEAR_COLORLESS_GRADES: [&str; 3] = ["E", "F", "G"];

// ────────────────────────────────────────────────────────────────────────────
// Approaches
// ────────────────────────────────────────────────────────────────────────────

/// Generation strategy. One candidate is produced per focus, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApproachFocus {
    StoryOptimized,
    Balanced,
    Statement,
}

impl ApproachFocus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApproachFocus::StoryOptimized => "story_optimized",
            ApproachFocus::Balanced => "balanced",
            ApproachFocus::Statement => "statement",
        }
    }
}

/// Internal strategy descriptor diversifying the three candidates.
#[derive(Debug, Clone, Copy)]
pub struct Approach {
    pub focus: ApproachFocus,
    pub carat_range: (f64, f64),
    pub premium_factor: f64,
}

/// The three fixed approaches, in output order.
pub const APPROACHES: [Approach; 3] = [
    Approach {
        focus: ApproachFocus::StoryOptimized,
        carat_range: (0.8, 1.5),
        premium_factor: 1.2,
    },
    Approach {
        focus: ApproachFocus::Balanced,
        carat_range: (1.0, 2.0),
        premium_factor: 1.0,
    },
    Approach {
        focus: ApproachFocus::Statement,
        carat_range: (1.5, 3.0),
        premium_factor: 1.1,
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Candidate
// ────────────────────────────────────────────────────────────────────────────

/// A fully configured design. Immutable once built; the narrative composer
/// only attaches text afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct DesignCandidate {
    pub stone_shape: StoneShape,
    /// Color grade letter (D–G). Presentation formatting is the caller's job.
    pub stone_color: &'static str,
    pub stone_clarity: &'static str,
    pub carat_weight: f64,
    pub metal_type: Metal,
    pub setting_type: &'static str,
    pub estimated_price: f64,
    pub focus: ApproachFocus,
    /// First two detected themes plus the approach focus label.
    pub style_tags: Vec<String>,
    pub rationale: Option<String>,
    pub story_connection: Option<String>,
    pub premium_features: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Generates exactly three design candidates, one per approach.
///
/// The budget interval comes from `preferences.budget_range` (default
/// interval when absent or unknown). If a candidate's full price exceeds the
/// ceiling, the carat is recomputed once via the inverse solve and the price
/// recomputed once; a second overshoot is accepted as-is.
pub fn generate_designs<R: Rng>(
    kb: &KnowledgeBase,
    analysis: &StoryAnalysis,
    _story: &StoryInput,
    preferences: &Preferences,
    rng: &mut R,
) -> Vec<DesignCandidate> {
    let (_budget_min, budget_max) = kb.budget_interval(preferences.budget_range.as_deref());

    APPROACHES
        .iter()
        .map(|approach| build_candidate(kb, analysis, preferences, approach, budget_max, rng))
        .collect()
}

fn build_candidate<R: Rng>(
    kb: &KnowledgeBase,
    analysis: &StoryAnalysis,
    preferences: &Preferences,
    approach: &Approach,
    budget_max: f64,
    rng: &mut R,
) -> DesignCandidate {
    let metal_type = pick_metal(analysis, preferences, rng);
    let stone_shape = pick_shape(analysis, rng);

    // Sample inside the approach interval, cap by what the budget can carry
    // at this premium factor, floor at half a carat.
    let (lo, hi) = approach.carat_range;
    let target_carat = rng.gen_range(lo..=hi);
    let max_affordable =
        (budget_max * INITIAL_BUDGET_SHARE) / (BASE_STONE_PRICE * approach.premium_factor);
    let mut carat_weight = round2(target_carat.min(max_affordable)).max(0.5);

    let stone_clarity = CLARITY_GRADES.choose(rng).copied().unwrap_or("VS1");
    let stone_color = if rng.gen::<f64>() > 0.7 {
        "D"
    } else {
        NEAR_COLORLESS_GRADES.choose(rng).copied().unwrap_or("E")
    };

    let setting_type = pick_setting(analysis, rng);

    let mut estimated_price = estimate_price(
        kb,
        stone_shape,
        carat_weight,
        metal_type,
        SETTING_COMPLEXITY,
        true,
    );

    // Single-pass budget-fit correction. The inverse solve ignores the
    // metal/setting terms, so the recomputed price may still exceed the
    // ceiling; that second overshoot is accepted.
    if estimated_price > budget_max {
        carat_weight = fit_carat_to_budget(budget_max, approach.premium_factor);
        estimated_price = estimate_price(
            kb,
            stone_shape,
            carat_weight,
            metal_type,
            SETTING_COMPLEXITY,
            true,
        );
    }

    let mut style_tags: Vec<String> = analysis
        .themes
        .iter()
        .take(2)
        .map(|t| t.as_str().to_string())
        .collect();
    style_tags.push(approach.focus.as_str().to_string());

    DesignCandidate {
        stone_shape,
        stone_color,
        stone_clarity,
        carat_weight,
        metal_type,
        setting_type,
        estimated_price,
        focus: approach.focus,
        style_tags,
        rationale: None,
        story_connection: None,
        premium_features: Vec::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
