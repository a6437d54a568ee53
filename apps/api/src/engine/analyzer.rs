//! Theme analysis: scores free text against the keyword dictionaries to
//! produce a `StoryAnalysis`.
//!
//! Matching is deliberately substring containment, not tokenized word-boundary
//! matching: it trades precision for recall and the output contract depends
//! on it. Pure function of (knowledge base, text); no randomness, no errors.

use serde::Serialize;

use crate::engine::knowledge::{KnowledgeBase, Metal, StoneShape, Theme};
use crate::models::story::StoryInput;

/// Closed personality vocabulary derived from fixed keyword groups.
/// Traits are not mutually exclusive; a text may set zero or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityTrait {
    Introverted,
    Extroverted,
    Creative,
    Active,
}

/// Fixed emotional vocabulary; the analysis reports the subset found.
const EMOTION_WORDS: [&str; 7] = [
    "love",
    "joy",
    "happiness",
    "passion",
    "devotion",
    "cherish",
    "adore",
];

const INTROVERTED_WORDS: [&str; 4] = ["quiet", "introverted", "shy", "private"];
const EXTROVERTED_WORDS: [&str; 4] = ["outgoing", "social", "party", "friends"];
const CREATIVE_WORDS: [&str; 4] = ["creative", "artistic", "paint", "design"];
const ACTIVE_WORDS: [&str; 4] = ["active", "sports", "hiking", "gym"];

/// Everything the engine inferred from the customer's free text. Created
/// fresh per request; never persisted by the engine.
#[derive(Debug, Clone, Serialize)]
pub struct StoryAnalysis {
    /// First 3 detected themes, in dictionary declaration order.
    pub themes: Vec<Theme>,
    /// Themes with strong keyword density (≥ 2 hits).
    pub style_indicators: Vec<Theme>,
    pub personality_traits: Vec<PersonalityTrait>,
    pub emotional_keywords: Vec<&'static str>,
    pub recommended_metals: Vec<Metal>,
    pub recommended_shapes: Vec<StoneShape>,
}

impl StoryAnalysis {
    /// Primary theme driving setting-style selection: the first detected
    /// theme, or `Classic` when nothing was detected.
    pub fn primary_theme(&self) -> Theme {
        self.themes.first().copied().unwrap_or(Theme::Classic)
    }
}

/// Analyzes the story fields for themes, personality, and style indicators.
///
/// The corpus is the lowercased concatenation of love story, personality,
/// style preferences, and special moments; absent fields contribute nothing.
pub fn analyze_story(kb: &KnowledgeBase, story: &StoryInput) -> StoryAnalysis {
    let corpus = [
        story.love_story.as_deref(),
        story.personality.as_deref(),
        story.style_preferences.as_deref(),
        story.special_moments.as_deref(),
    ]
    .into_iter()
    .map(|f| f.unwrap_or(""))
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase();

    let mut themes = Vec::new();
    let mut style_indicators = Vec::new();

    for (theme, keywords) in kb.theme_keywords() {
        let hits = keywords.iter().filter(|kw| corpus.contains(**kw)).count();
        if hits > 0 {
            themes.push(*theme);
            if hits >= 2 {
                style_indicators.push(*theme);
            }
        }
    }
    themes.truncate(3);

    let emotional_keywords: Vec<&'static str> = EMOTION_WORDS
        .iter()
        .filter(|w| corpus.contains(**w))
        .copied()
        .collect();

    let mut personality_traits = Vec::new();
    if INTROVERTED_WORDS.iter().any(|w| corpus.contains(w)) {
        personality_traits.push(PersonalityTrait::Introverted);
    }
    if EXTROVERTED_WORDS.iter().any(|w| corpus.contains(w)) {
        personality_traits.push(PersonalityTrait::Extroverted);
    }
    if CREATIVE_WORDS.iter().any(|w| corpus.contains(w)) {
        personality_traits.push(PersonalityTrait::Creative);
    }
    if ACTIVE_WORDS.iter().any(|w| corpus.contains(w)) {
        personality_traits.push(PersonalityTrait::Active);
    }

    let (recommended_metals, recommended_shapes) = recommend_elements(&themes);

    StoryAnalysis {
        themes,
        style_indicators,
        personality_traits,
        emotional_keywords,
        recommended_metals,
        recommended_shapes,
    }
}

/// Fixed decision table mapping detected themes to candidate element sets.
fn recommend_elements(themes: &[Theme]) -> (Vec<Metal>, Vec<StoneShape>) {
    let has = |t: Theme| themes.contains(&t);

    let metals = if has(Theme::Vintage) || has(Theme::Romantic) {
        vec![Metal::RoseGold, Metal::YellowGold]
    } else if has(Theme::Minimalist) {
        vec![Metal::Platinum, Metal::WhiteGold]
    } else {
        vec![Metal::WhiteGold, Metal::Platinum]
    };

    let shapes = if has(Theme::Romantic) {
        vec![StoneShape::Round, StoneShape::Cushion, StoneShape::Heart]
    } else if has(Theme::Minimalist) {
        vec![StoneShape::Round, StoneShape::Princess, StoneShape::Emerald]
    } else if has(Theme::Artistic) {
        vec![StoneShape::Pear, StoneShape::Marquise, StoneShape::Oval]
    } else {
        vec![StoneShape::Round, StoneShape::Oval, StoneShape::Cushion]
    };

    (metals, shapes)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn story_with_love_story(text: &str) -> StoryInput {
        StoryInput {
            love_story: Some(text.to_string()),
            ..StoryInput::default()
        }
    }

    #[test]
    fn test_hiking_sunset_story_detects_nature_then_romantic() {
        let kb = KnowledgeBase::builtin();
        let story =
            story_with_love_story("We love hiking in the mountains and watching the sunset");
        let analysis = analyze_story(&kb, &story);

        let nature = analysis.themes.iter().position(|t| *t == Theme::Nature);
        let romantic = analysis.themes.iter().position(|t| *t == Theme::Romantic);
        assert!(nature.is_some(), "nature must be detected (hiking, mountains)");
        assert!(romantic.is_some(), "romantic must be detected (love, sunset)");
        assert!(nature < romantic, "dictionary order: nature before romantic");
        assert!(analysis.themes.len() <= 3);
    }

    #[test]
    fn test_empty_story_yields_no_themes_and_default_elements() {
        let kb = KnowledgeBase::builtin();
        let analysis = analyze_story(&kb, &StoryInput::default());

        assert!(analysis.themes.is_empty());
        assert!(analysis.style_indicators.is_empty());
        assert!(analysis.personality_traits.is_empty());
        assert!(analysis.emotional_keywords.is_empty());
        assert_eq!(
            analysis.recommended_metals,
            vec![Metal::WhiteGold, Metal::Platinum]
        );
        assert_eq!(
            analysis.recommended_shapes,
            vec![StoneShape::Round, StoneShape::Oval, StoneShape::Cushion]
        );
        assert_eq!(analysis.primary_theme(), Theme::Classic);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let kb = KnowledgeBase::builtin();
        let story = story_with_love_story(
            "A quiet proposal at sunset, surrounded by roses and candles",
        );
        let a = analyze_story(&kb, &story);
        let b = analyze_story(&kb, &story);
        assert_eq!(a.themes, b.themes);
        assert_eq!(a.style_indicators, b.style_indicators);
        assert_eq!(a.personality_traits, b.personality_traits);
        assert_eq!(a.emotional_keywords, b.emotional_keywords);
    }

    #[test]
    fn test_style_indicator_requires_two_keyword_hits() {
        let kb = KnowledgeBase::builtin();
        // One romantic keyword only
        let weak = analyze_story(&kb, &story_with_love_story("a sunset walk"));
        assert!(weak.themes.contains(&Theme::Romantic));
        assert!(!weak.style_indicators.contains(&Theme::Romantic));

        // Two romantic keywords
        let strong = analyze_story(&kb, &story_with_love_story("a sunset proposal"));
        assert!(strong.style_indicators.contains(&Theme::Romantic));
    }

    #[test]
    fn test_themes_truncated_to_three() {
        let kb = KnowledgeBase::builtin();
        // Hits nature, romantic, vintage, artistic, sophisticated at least
        let story = story_with_love_story(
            "love of nature, vintage art in an elegant gallery garden",
        );
        let analysis = analyze_story(&kb, &story);
        assert_eq!(analysis.themes.len(), 3);
    }

    #[test]
    fn test_all_text_fields_feed_the_corpus() {
        let kb = KnowledgeBase::builtin();
        let story = StoryInput {
            love_story: None,
            personality: Some("quiet and creative".to_string()),
            style_preferences: Some("clean, simple lines".to_string()),
            special_moments: Some("our first hiking trip".to_string()),
            occasion: None,
            timeline: None,
        };
        let analysis = analyze_story(&kb, &story);
        assert!(analysis.themes.contains(&Theme::Minimalist));
        assert!(analysis.personality_traits.contains(&PersonalityTrait::Introverted));
        assert!(analysis.personality_traits.contains(&PersonalityTrait::Creative));
        assert!(analysis.personality_traits.contains(&PersonalityTrait::Active));
    }

    #[test]
    fn test_occasion_and_timeline_do_not_feed_the_corpus() {
        let kb = KnowledgeBase::builtin();
        let story = StoryInput {
            occasion: Some("valentine proposal".to_string()),
            timeline: Some("sunset next month".to_string()),
            ..StoryInput::default()
        };
        let analysis = analyze_story(&kb, &story);
        assert!(analysis.themes.is_empty());
    }

    #[test]
    fn test_emotional_keywords_are_the_found_subset() {
        let kb = KnowledgeBase::builtin();
        let analysis = analyze_story(
            &kb,
            &story_with_love_story("We cherish the joy we found together"),
        );
        assert_eq!(analysis.emotional_keywords, vec!["joy", "cherish"]);
    }

    #[test]
    fn test_substring_matching_is_containment_not_word_boundary() {
        let kb = KnowledgeBase::builtin();
        // "artistic" contains "art"; containment matching must fire both
        // artistic (creative vocab) and the artistic theme via "art".
        let analysis = analyze_story(&kb, &story_with_love_story("her artistic side"));
        assert!(analysis.themes.contains(&Theme::Artistic));
    }

    #[test]
    fn test_vintage_and_romantic_recommend_warm_metals() {
        let kb = KnowledgeBase::builtin();
        let analysis =
            analyze_story(&kb, &story_with_love_story("her grandmother's vintage ring"));
        assert_eq!(
            analysis.recommended_metals,
            vec![Metal::RoseGold, Metal::YellowGold]
        );
    }

    #[test]
    fn test_artistic_theme_recommends_fancy_shapes() {
        let kb = KnowledgeBase::builtin();
        let analysis = analyze_story(&kb, &story_with_love_story("she is an artist"));
        assert_eq!(
            analysis.recommended_shapes,
            vec![StoneShape::Pear, StoneShape::Marquise, StoneShape::Oval]
        );
    }
}
