#![allow(dead_code)]

//! Knowledge base: the static reference tables the whole engine reads from.
//!
//! Built once at startup (`KnowledgeBase::builtin()`), shared by `Arc`, never
//! mutated. Shape/metal/theme keys are closed enums so exhaustiveness is
//! checked at compile time; the unknown-key fallback lives at the
//! string-parse boundary (`Metal::parse` etc.).

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Closed key enums
// ────────────────────────────────────────────────────────────────────────────

/// Diamond cut. Wire format is the lowercase name ("round", "princess", …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoneShape {
    Round,
    Princess,
    Cushion,
    Emerald,
    Oval,
    Pear,
    Marquise,
    Heart,
}

impl StoneShape {
    pub const ALL: [StoneShape; 8] = [
        StoneShape::Round,
        StoneShape::Princess,
        StoneShape::Cushion,
        StoneShape::Emerald,
        StoneShape::Oval,
        StoneShape::Pear,
        StoneShape::Marquise,
        StoneShape::Heart,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoneShape::Round => "round",
            StoneShape::Princess => "princess",
            StoneShape::Cushion => "cushion",
            StoneShape::Emerald => "emerald",
            StoneShape::Oval => "oval",
            StoneShape::Pear => "pear",
            StoneShape::Marquise => "marquise",
            StoneShape::Heart => "heart",
        }
    }

    /// Parses a user-supplied shape label. Unknown labels are `None`; the
    /// caller falls back to the recommendation-driven pick.
    pub fn parse(label: &str) -> Option<StoneShape> {
        StoneShape::ALL.iter().copied().find(|s| s.as_str() == label)
    }
}

/// Setting metal. Wire format keeps the original snake_case labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metal {
    Platinum,
    WhiteGold,
    YellowGold,
    RoseGold,
}

impl Metal {
    pub const ALL: [Metal; 4] = [
        Metal::Platinum,
        Metal::WhiteGold,
        Metal::YellowGold,
        Metal::RoseGold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metal::Platinum => "platinum",
            Metal::WhiteGold => "white_gold",
            Metal::YellowGold => "yellow_gold",
            Metal::RoseGold => "rose_gold",
        }
    }

    /// Human-readable name for narrative text ("white gold", not "white_gold").
    pub fn display_name(&self) -> &'static str {
        match self {
            Metal::Platinum => "platinum",
            Metal::WhiteGold => "white gold",
            Metal::YellowGold => "yellow gold",
            Metal::RoseGold => "rose gold",
        }
    }

    pub fn parse(label: &str) -> Option<Metal> {
        Metal::ALL.iter().copied().find(|m| m.as_str() == label)
    }
}

/// Narrative/style theme detected from free text. `Classic` is the fallback
/// primary theme when nothing was detected; it has no keyword set and is
/// never produced by detection itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Nature,
    Romantic,
    Vintage,
    Artistic,
    Minimalist,
    Bohemian,
    Sophisticated,
    Adventurous,
    Classic,
}

impl Theme {
    /// Detectable themes, in dictionary declaration order. Detection order is
    /// a reproducible contract: themes are reported in this order, not by
    /// keyword-hit strength.
    pub const DETECTABLE: [Theme; 8] = [
        Theme::Nature,
        Theme::Romantic,
        Theme::Vintage,
        Theme::Artistic,
        Theme::Minimalist,
        Theme::Bohemian,
        Theme::Sophisticated,
        Theme::Adventurous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Nature => "nature",
            Theme::Romantic => "romantic",
            Theme::Vintage => "vintage",
            Theme::Artistic => "artistic",
            Theme::Minimalist => "minimalist",
            Theme::Bohemian => "bohemian",
            Theme::Sophisticated => "sophisticated",
            Theme::Adventurous => "adventurous",
            Theme::Classic => "classic",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Profiles
// ────────────────────────────────────────────────────────────────────────────

/// Per-shape reference data: cut character, relative price premium, and the
/// story themes the cut traditionally signals.
#[derive(Debug, Clone)]
pub struct ShapeProfile {
    pub brilliance: &'static str,
    pub price_premium: f64,
    pub story_themes: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct MetalProfile {
    pub price_per_gram: f64,
    pub durability: &'static str,
    pub story: &'static str,
    pub personality_match: &'static [&'static str],
}

/// Element styling preferred for a theme; surfaced as discoverable metadata.
#[derive(Debug, Clone)]
pub struct ThemeProfile {
    pub metals: &'static [Metal],
    pub shapes: &'static [StoneShape],
    pub style: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// KnowledgeBase
// ────────────────────────────────────────────────────────────────────────────

/// Default budget interval when the label is absent or unknown.
pub const DEFAULT_BUDGET: (f64, f64) = (10_000.0, 30_000.0);

/// Occasions advertised through the options endpoint.
pub const OCCASIONS: [&str; 6] = [
    "engagement",
    "anniversary",
    "birthday",
    "valentine",
    "just_because",
    "milestone",
];

pub struct KnowledgeBase {
    shapes: Vec<(StoneShape, ShapeProfile)>,
    metals: Vec<(Metal, MetalProfile)>,
    themes: Vec<(Theme, ThemeProfile)>,
    keywords: Vec<(Theme, &'static [&'static str])>,
    budget_ranges: Vec<(&'static str, (f64, f64))>,
}

impl KnowledgeBase {
    /// The embedded reference data set. Values mirror the production catalog.
    pub fn builtin() -> Self {
        let shapes = vec![
            (
                StoneShape::Round,
                ShapeProfile {
                    brilliance: "exceptional",
                    price_premium: 1.0,
                    story_themes: &["timeless", "classic", "eternal"],
                },
            ),
            (
                StoneShape::Princess,
                ShapeProfile {
                    brilliance: "excellent",
                    price_premium: 0.85,
                    story_themes: &["modern", "bold", "confident"],
                },
            ),
            (
                StoneShape::Cushion,
                ShapeProfile {
                    brilliance: "romantic",
                    price_premium: 0.80,
                    story_themes: &["vintage", "romantic", "soft"],
                },
            ),
            (
                StoneShape::Emerald,
                ShapeProfile {
                    brilliance: "elegant",
                    price_premium: 0.75,
                    story_themes: &["sophisticated", "art deco", "architectural"],
                },
            ),
            (
                StoneShape::Oval,
                ShapeProfile {
                    brilliance: "graceful",
                    price_premium: 0.90,
                    story_themes: &["elongating", "graceful", "unique"],
                },
            ),
            (
                StoneShape::Pear,
                ShapeProfile {
                    brilliance: "unique",
                    price_premium: 0.75,
                    story_themes: &["teardrops of joy", "unique", "artistic"],
                },
            ),
            (
                StoneShape::Marquise,
                ShapeProfile {
                    brilliance: "dramatic",
                    price_premium: 0.70,
                    story_themes: &["regal", "dramatic", "vintage"],
                },
            ),
            (
                StoneShape::Heart,
                ShapeProfile {
                    brilliance: "romantic",
                    price_premium: 0.75,
                    story_themes: &["ultimate love", "romantic", "symbolic"],
                },
            ),
        ];

        let metals = vec![
            (
                Metal::Platinum,
                MetalProfile {
                    price_per_gram: 45.0,
                    durability: "lifetime",
                    story: "Rarer than gold, platinum represents eternal commitment",
                    personality_match: &["sophisticated", "classic", "refined"],
                },
            ),
            (
                Metal::WhiteGold,
                MetalProfile {
                    price_per_gram: 65.0,
                    durability: "excellent",
                    story: "Modern elegance with timeless appeal",
                    personality_match: &["contemporary", "clean", "minimalist"],
                },
            ),
            (
                Metal::YellowGold,
                MetalProfile {
                    price_per_gram: 70.0,
                    durability: "excellent",
                    story: "Traditional warmth and golden memories",
                    personality_match: &["traditional", "warm", "classic"],
                },
            ),
            (
                Metal::RoseGold,
                MetalProfile {
                    price_per_gram: 68.0,
                    durability: "excellent",
                    story: "Romantic blush of copper creates unique beauty",
                    personality_match: &["romantic", "unique", "artistic", "bohemian"],
                },
            ),
        ];

        let themes = vec![
            (
                Theme::Nature,
                ThemeProfile {
                    metals: &[Metal::RoseGold, Metal::YellowGold],
                    shapes: &[StoneShape::Oval, StoneShape::Pear],
                    style: "organic textures",
                },
            ),
            (
                Theme::Romantic,
                ThemeProfile {
                    metals: &[Metal::RoseGold, Metal::YellowGold],
                    shapes: &[StoneShape::Round, StoneShape::Cushion, StoneShape::Heart],
                    style: "soft romantic",
                },
            ),
            (
                Theme::Vintage,
                ThemeProfile {
                    metals: &[Metal::RoseGold, Metal::YellowGold],
                    shapes: &[StoneShape::Cushion, StoneShape::Emerald],
                    style: "art deco details",
                },
            ),
            (
                Theme::Artistic,
                ThemeProfile {
                    metals: &[Metal::RoseGold, Metal::WhiteGold],
                    shapes: &[StoneShape::Princess, StoneShape::Emerald],
                    style: "sculptural unique",
                },
            ),
            (
                Theme::Minimalist,
                ThemeProfile {
                    metals: &[Metal::Platinum, Metal::WhiteGold],
                    shapes: &[StoneShape::Round, StoneShape::Princess],
                    style: "clean modern",
                },
            ),
            (
                Theme::Bohemian,
                ThemeProfile {
                    metals: &[Metal::RoseGold, Metal::YellowGold],
                    shapes: &[StoneShape::Oval, StoneShape::Pear],
                    style: "organic flowing",
                },
            ),
            (
                Theme::Sophisticated,
                ThemeProfile {
                    metals: &[Metal::Platinum, Metal::WhiteGold],
                    shapes: &[StoneShape::Round, StoneShape::Emerald],
                    style: "refined classic",
                },
            ),
            (
                Theme::Adventurous,
                ThemeProfile {
                    metals: &[Metal::WhiteGold, Metal::Platinum],
                    shapes: &[StoneShape::Oval, StoneShape::Pear],
                    style: "organic flowing",
                },
            ),
        ];

        // Declaration order is the detection/report order.
        let keywords: Vec<(Theme, &'static [&'static str])> = vec![
            (
                Theme::Nature,
                &[
                    "nature", "hiking", "outdoors", "garden", "flowers", "trees", "beach",
                    "mountains",
                ],
            ),
            (
                Theme::Romantic,
                &[
                    "love", "romantic", "sunset", "candles", "roses", "proposal", "heart",
                    "valentine",
                ],
            ),
            (
                Theme::Vintage,
                &[
                    "vintage",
                    "antique",
                    "classic",
                    "old",
                    "grandmother",
                    "heirloom",
                    "traditional",
                ],
            ),
            (
                Theme::Artistic,
                &[
                    "art", "creative", "artist", "paint", "design", "unique", "sculpture",
                    "gallery",
                ],
            ),
            (
                Theme::Minimalist,
                &["simple", "clean", "minimal", "modern", "sleek", "understated"],
            ),
            (
                Theme::Bohemian,
                &[
                    "boho",
                    "free",
                    "creative",
                    "artistic",
                    "unconventional",
                    "indie",
                    "eclectic",
                ],
            ),
            (
                Theme::Sophisticated,
                &[
                    "elegant",
                    "refined",
                    "classy",
                    "sophisticated",
                    "professional",
                    "executive",
                ],
            ),
            (
                Theme::Adventurous,
                &[
                    "travel",
                    "adventure",
                    "explore",
                    "journey",
                    "discover",
                    "wanderlust",
                ],
            ),
        ];

        let budget_ranges = vec![
            ("5000-10000", (5_000.0, 10_000.0)),
            ("10000-20000", (10_000.0, 20_000.0)),
            ("20000-50000", (20_000.0, 50_000.0)),
            ("50000-100000", (50_000.0, 100_000.0)),
            ("100000+", (100_000.0, 500_000.0)),
            ("consultation", (20_000.0, 100_000.0)),
        ];

        KnowledgeBase {
            shapes,
            metals,
            themes,
            keywords,
            budget_ranges,
        }
    }

    pub fn shape_profile(&self, shape: StoneShape) -> &ShapeProfile {
        // builtin() covers every variant; guarded by test below.
        self.shapes
            .iter()
            .find(|(s, _)| *s == shape)
            .map(|(_, p)| p)
            .unwrap_or(&FALLBACK_SHAPE)
    }

    pub fn metal_profile(&self, metal: Metal) -> &MetalProfile {
        self.metals
            .iter()
            .find(|(m, _)| *m == metal)
            .map(|(_, p)| p)
            .unwrap_or(&FALLBACK_METAL)
    }

    pub fn theme_profile(&self, theme: Theme) -> Option<&ThemeProfile> {
        self.themes.iter().find(|(t, _)| *t == theme).map(|(_, p)| p)
    }

    /// Theme keyword sets in detection order.
    pub fn theme_keywords(&self) -> &[(Theme, &'static [&'static str])] {
        &self.keywords
    }

    /// Resolves a budget-range label to a closed `[min, max]` interval.
    /// Absent or unknown labels fall back to `DEFAULT_BUDGET`.
    pub fn budget_interval(&self, label: Option<&str>) -> (f64, f64) {
        label
            .and_then(|l| {
                self.budget_ranges
                    .iter()
                    .find(|(name, _)| *name == l)
                    .map(|(_, range)| *range)
            })
            .unwrap_or(DEFAULT_BUDGET)
    }

    // Discoverable metadata; these are exactly the keys the engine uses
    // internally, so the options listing can never drift from the generator.

    pub fn shape_names(&self) -> Vec<&'static str> {
        self.shapes.iter().map(|(s, _)| s.as_str()).collect()
    }

    pub fn metal_names(&self) -> Vec<&'static str> {
        self.metals.iter().map(|(m, _)| m.as_str()).collect()
    }

    pub fn theme_names(&self) -> Vec<&'static str> {
        self.themes.iter().map(|(t, _)| t.as_str()).collect()
    }

    pub fn budget_labels(&self) -> Vec<&'static str> {
        self.budget_ranges.iter().map(|(name, _)| *name).collect()
    }
}

// Fallback profiles for the (compile-time impossible, table-drift) case of a
// variant missing from builtin(). Matches the original's defaults: premium
// 1.0 for an unknown shape, 50/gram for an unknown metal.
static FALLBACK_SHAPE: ShapeProfile = ShapeProfile {
    brilliance: "exceptional",
    price_premium: 1.0,
    story_themes: &[],
};

static FALLBACK_METAL: MetalProfile = MetalProfile {
    price_per_gram: 50.0,
    durability: "excellent",
    story: "",
    personality_match: &[],
};

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_variant_has_a_profile() {
        let kb = KnowledgeBase::builtin();
        for shape in StoneShape::ALL {
            // find() directly; the fallback must never be needed
            assert!(
                kb.shapes.iter().any(|(s, _)| *s == shape),
                "missing profile for {shape:?}"
            );
        }
    }

    #[test]
    fn test_every_metal_variant_has_a_profile() {
        let kb = KnowledgeBase::builtin();
        for metal in Metal::ALL {
            assert!(kb.metals.iter().any(|(m, _)| *m == metal));
        }
    }

    #[test]
    fn test_every_detectable_theme_has_profile_and_keywords() {
        let kb = KnowledgeBase::builtin();
        for theme in Theme::DETECTABLE {
            assert!(kb.theme_profile(theme).is_some(), "no profile for {theme:?}");
            assert!(
                kb.keywords.iter().any(|(t, _)| *t == theme),
                "no keywords for {theme:?}"
            );
        }
    }

    #[test]
    fn test_keyword_order_lists_nature_before_romantic() {
        let kb = KnowledgeBase::builtin();
        let order: Vec<Theme> = kb.theme_keywords().iter().map(|(t, _)| *t).collect();
        let nature = order.iter().position(|t| *t == Theme::Nature).unwrap();
        let romantic = order.iter().position(|t| *t == Theme::Romantic).unwrap();
        assert!(nature < romantic);
    }

    #[test]
    fn test_round_shape_has_unit_premium() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.shape_profile(StoneShape::Round).price_premium, 1.0);
    }

    #[test]
    fn test_platinum_price_per_gram() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.metal_profile(Metal::Platinum).price_per_gram, 45.0);
    }

    #[test]
    fn test_budget_interval_known_label() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(
            kb.budget_interval(Some("5000-10000")),
            (5_000.0, 10_000.0)
        );
        assert_eq!(
            kb.budget_interval(Some("100000+")),
            (100_000.0, 500_000.0)
        );
    }

    #[test]
    fn test_budget_interval_unknown_or_absent_falls_back() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.budget_interval(Some("a-zillion")), DEFAULT_BUDGET);
        assert_eq!(kb.budget_interval(None), DEFAULT_BUDGET);
    }

    #[test]
    fn test_metal_parse_round_trips_wire_names() {
        for metal in Metal::ALL {
            assert_eq!(Metal::parse(metal.as_str()), Some(metal));
        }
        assert_eq!(Metal::parse("titanium"), None);
    }

    #[test]
    fn test_shape_parse_rejects_unknown() {
        assert_eq!(StoneShape::parse("round"), Some(StoneShape::Round));
        assert_eq!(StoneShape::parse("trillion"), None);
    }

    #[test]
    fn test_metal_serde_uses_snake_case() {
        let json = serde_json::to_string(&Metal::WhiteGold).unwrap();
        assert_eq!(json, r#""white_gold""#);
        let back: Metal = serde_json::from_str(r#""rose_gold""#).unwrap();
        assert_eq!(back, Metal::RoseGold);
    }
}
