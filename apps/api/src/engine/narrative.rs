//! Narrative composition: rationale, story connection, and premium feature
//! text for each candidate.
//!
//! Rationale is template selection keyed by approach focus. Story connection
//! evaluates an ordered rule list against themes, candidate elements, and
//! the special-moments text, then picks one firing rule at random via the
//! injected rng (generic fallback when nothing fires).

use rand::seq::SliceRandom;
use rand::Rng;

use crate::engine::analyzer::StoryAnalysis;
use crate::engine::generator::{ApproachFocus, DesignCandidate};
use crate::engine::knowledge::{Metal, StoneShape, Theme};
use crate::models::story::StoryInput;

/// Attaches rationale, story connection, and premium features to each
/// candidate. Candidates are otherwise returned unchanged.
pub fn compose_narratives<R: Rng>(
    candidates: Vec<DesignCandidate>,
    analysis: &StoryAnalysis,
    story: &StoryInput,
    rng: &mut R,
) -> Vec<DesignCandidate> {
    candidates
        .into_iter()
        .map(|mut candidate| {
            candidate.rationale = Some(rationale(&candidate, analysis));
            candidate.story_connection = Some(story_connection(&candidate, analysis, story, rng));
            candidate.premium_features = premium_features(&candidate, analysis);
            candidate
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Rationale
// ────────────────────────────────────────────────────────────────────────────

/// Focus-keyed rationale template plus the fixed technical-excellence suffix.
pub fn rationale(candidate: &DesignCandidate, analysis: &StoryAnalysis) -> String {
    let shape = candidate.stone_shape.as_str();
    let metal = candidate.metal_type.display_name();
    let clarity = candidate.stone_clarity;

    let base = match candidate.focus {
        ApproachFocus::StoryOptimized => {
            let themes = analysis
                .themes
                .iter()
                .take(2)
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "This design harmoniously weaves your personal story into every detail. \
                 The {shape} cut and {metal} setting were specifically chosen to reflect \
                 the {themes} elements of your journey together."
            )
        }
        ApproachFocus::Balanced => format!(
            "Representing the perfect balance of exceptional quality and meaningful design, \
             this {}-carat {shape} diamond achieves optimal brilliance while honoring your \
             style preferences. The {clarity} clarity ensures maximum light return.",
            candidate.carat_weight
        ),
        ApproachFocus::Statement => format!(
            "For those moments when only the extraordinary will do, this magnificent \
             {}-carat centerpiece commands attention while maintaining sophisticated \
             elegance. The {metal} setting provides the perfect stage for this remarkable \
             diamond.",
            candidate.carat_weight
        ),
    };

    format!(
        "{base} Certified for exceptional cut quality and {clarity} clarity grade, \
         this piece represents the pinnacle of diamond craftsmanship."
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Story connection
// ────────────────────────────────────────────────────────────────────────────

/// Ordered rule evaluation, then one random pick among firing rules.
pub fn story_connection<R: Rng>(
    candidate: &DesignCandidate,
    analysis: &StoryAnalysis,
    story: &StoryInput,
    rng: &mut R,
) -> String {
    let connections = matching_connections(candidate, analysis, story);
    connections
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| generic_connection(candidate))
}

/// All connection rules that fire for this candidate, in rule order.
fn matching_connections(
    candidate: &DesignCandidate,
    analysis: &StoryAnalysis,
    story: &StoryInput,
) -> Vec<String> {
    let mut connections = Vec::new();
    let themes = &analysis.themes;

    if themes.contains(&Theme::Romantic) {
        if candidate.stone_shape == StoneShape::Heart {
            connections
                .push("The heart shape literally embodies the love you share".to_string());
        } else if candidate.stone_shape == StoneShape::Round {
            connections.push(
                "Like your love, a round diamond has no beginning or end - it's eternal"
                    .to_string(),
            );
        } else if candidate.metal_type == Metal::RoseGold {
            connections.push(
                "Rose gold's warm blush mirrors the romantic glow you bring to each other's lives"
                    .to_string(),
            );
        }
    }

    if themes.contains(&Theme::Vintage) {
        if matches!(
            candidate.stone_shape,
            StoneShape::Cushion | StoneShape::Emerald
        ) {
            connections.push(
                "This vintage-inspired cut echoes the timeless romance you both cherish"
                    .to_string(),
            );
        }
        if candidate.metal_type == Metal::YellowGold {
            connections.push(
                "Yellow gold connects you to generations of love stories before yours"
                    .to_string(),
            );
        }
    }

    if themes.contains(&Theme::Nature) {
        if matches!(candidate.stone_shape, StoneShape::Oval | StoneShape::Pear) {
            connections.push(
                "The organic curves mirror the natural beauty where your love story began"
                    .to_string(),
            );
        }
        if story
            .love_story
            .as_deref()
            .is_some_and(|text| text.contains("hiking"))
        {
            connections.push(
                "Durable enough for all your adventures together, from mountain peaks to everyday moments"
                    .to_string(),
            );
        }
    }

    if themes.contains(&Theme::Artistic)
        && matches!(candidate.stone_shape, StoneShape::Pear | StoneShape::Marquise)
    {
        connections.push(
            "This unique cut reflects your creative spirits and artistic appreciation"
                .to_string(),
        );
    }

    if let Some(moments) = story.special_moments.as_deref() {
        let moments = moments.to_lowercase();
        if moments.contains("laugh") {
            connections.push(
                "The way light dances through this diamond reminds us of how she lights up when she laughs"
                    .to_string(),
            );
        }
        if moments.contains("hands") {
            connections.push(
                "Designed to complement the graceful hands that create such beautiful art"
                    .to_string(),
            );
        }
        if moments.contains("eyes") {
            connections.push(
                "The brilliance matches the sparkle we see in her eyes when she's truly happy"
                    .to_string(),
            );
        }
    }

    connections
}

fn generic_connection(candidate: &DesignCandidate) -> String {
    format!(
        "This {} diamond in {} celebrates your unique love story",
        candidate.stone_shape.as_str(),
        candidate.metal_type.display_name()
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Premium features
// ────────────────────────────────────────────────────────────────────────────

const BASE_FEATURES: [&str; 5] = [
    "GIA Certified Diamond",
    "Premium Cut Grade: Excellent",
    "Conflict-Free Sourcing Guarantee",
    "Lifetime Warranty & Service",
    "Custom Story Engraving Available",
];

/// Base features plus metal- and theme-specific additions.
pub fn premium_features(candidate: &DesignCandidate, analysis: &StoryAnalysis) -> Vec<String> {
    let mut features: Vec<String> = BASE_FEATURES.iter().map(|f| f.to_string()).collect();

    let metal_feature = match candidate.metal_type {
        Metal::Platinum => "Platinum Purity Hallmark",
        Metal::WhiteGold => "Rhodium Plated Finish",
        Metal::RoseGold => "Proprietary Rose Gold Alloy",
        Metal::YellowGold => "18K Gold Purity",
    };
    features.push(metal_feature.to_string());

    if analysis.themes.contains(&Theme::Vintage) {
        features.push("Hand-Engraved Milgrain Details".to_string());
    }
    if analysis.themes.contains(&Theme::Artistic) {
        features.push("Sculptural Setting Design".to_string());
    }

    features
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
