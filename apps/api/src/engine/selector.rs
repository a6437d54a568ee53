//! Element selection: narrows metal, shape, and setting for one candidate.
//!
//! An explicit customer preference always wins over an inferred
//! recommendation; everything else is a uniform pick from the analysis's
//! recommended pool, driven by the injected rng so tests can pin outputs.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::engine::analyzer::StoryAnalysis;
use crate::engine::knowledge::{Metal, StoneShape, Theme};
use crate::models::story::Preferences;

/// Setting styles allowed per primary theme.
const VINTAGE_SETTINGS: [&str; 3] = ["vintage", "halo", "milgrain"];
const ROMANTIC_SETTINGS: [&str; 3] = ["halo", "vintage", "pave"];
const MINIMALIST_SETTINGS: [&str; 3] = ["prong", "bezel", "tension"];
const DEFAULT_SETTINGS: [&str; 2] = ["prong", "halo"];

/// Metal for one candidate: the parsed explicit preference, else a uniform
/// pick from the recommended set (white gold if the set is somehow empty).
pub fn pick_metal<R: Rng>(
    analysis: &StoryAnalysis,
    preferences: &Preferences,
    rng: &mut R,
) -> Metal {
    if let Some(metal) = preferences.metal_type.as_deref().and_then(Metal::parse) {
        return metal;
    }
    analysis
        .recommended_metals
        .choose(rng)
        .copied()
        .unwrap_or(Metal::WhiteGold)
}

/// Stone shape: uniform pick from the recommended pool.
pub fn pick_shape<R: Rng>(analysis: &StoryAnalysis, rng: &mut R) -> StoneShape {
    analysis
        .recommended_shapes
        .choose(rng)
        .copied()
        .unwrap_or(StoneShape::Round)
}

/// Setting style allowed for the analysis's primary theme.
pub fn pick_setting<R: Rng>(analysis: &StoryAnalysis, rng: &mut R) -> &'static str {
    let options: &[&'static str] = match analysis.primary_theme() {
        Theme::Vintage => &VINTAGE_SETTINGS,
        Theme::Romantic => &ROMANTIC_SETTINGS,
        Theme::Minimalist => &MINIMALIST_SETTINGS,
        _ => &DEFAULT_SETTINGS,
    };
    options.choose(rng).copied().unwrap_or("prong")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
