//! Pricing: deterministic price formula and the inverse budget-fit solve.
//!
//! `price = 8000 * carat^1.5 * shape_premium
//!        + metal_price_per_gram * 6
//!        + 1200 * setting_complexity
//!        + 800 (story customization, when requested)`
//!
//! The 1.5 exponent on carat is part of the pricing contract: cheaper than
//! linear below one carat, convex above it. Never approximate it linearly.

use crate::engine::knowledge::{KnowledgeBase, Metal, StoneShape};

/// Base price of a premium-grade one-carat stone.
pub const BASE_STONE_PRICE: f64 = 8_000.0;
/// Average metal mass of a premium setting, in grams.
pub const SETTING_MASS_GRAMS: f64 = 6.0;
/// Craftsmanship base, scaled by setting complexity.
pub const SETTING_BASE: f64 = 1_200.0;
/// Flat surcharge for story-customized pieces.
pub const STORY_PREMIUM: f64 = 800.0;

/// Rounds to two decimal places (currency).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Full price of a configured piece, rounded to cents.
pub fn estimate_price(
    kb: &KnowledgeBase,
    shape: StoneShape,
    carat_weight: f64,
    metal: Metal,
    setting_complexity: f64,
    story_premium: bool,
) -> f64 {
    let stone = BASE_STONE_PRICE * carat_weight.powf(1.5) * kb.shape_profile(shape).price_premium;
    let metal_cost = kb.metal_profile(metal).price_per_gram * SETTING_MASS_GRAMS;
    let setting = SETTING_BASE * setting_complexity;
    let premium = if story_premium { STORY_PREMIUM } else { 0.0 };

    round2(stone + metal_cost + setting + premium)
}

/// Inverse solve: the carat weight that spends 90% of `budget_max` on the
/// stone term alone at the given premium factor. One-shot and linear; it
/// ignores the carat exponent and the metal/setting terms, so callers must
/// recompute the full price afterwards and may still land above budget.
/// Result is rounded to 2 decimals and floored at 0.5 carat.
pub fn fit_carat_to_budget(budget_max: f64, premium_factor: f64) -> f64 {
    let carat = (budget_max * 0.9) / (BASE_STONE_PRICE * premium_factor);
    round2(carat).max(0.5)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_price_round_platinum_one_carat() {
        // 8000*1.0*1.0 + 45*6 + 1200*1.3 + 800 = 10630.00
        let kb = KnowledgeBase::builtin();
        let price = estimate_price(&kb, StoneShape::Round, 1.0, Metal::Platinum, 1.3, true);
        assert_eq!(price, 10_630.00);
    }

    #[test]
    fn test_story_premium_adds_flat_800() {
        let kb = KnowledgeBase::builtin();
        let with = estimate_price(&kb, StoneShape::Oval, 1.2, Metal::RoseGold, 1.0, true);
        let without = estimate_price(&kb, StoneShape::Oval, 1.2, Metal::RoseGold, 1.0, false);
        assert_eq!(round2(with - without), 800.0);
    }

    #[test]
    fn test_price_strictly_increasing_in_carat() {
        let kb = KnowledgeBase::builtin();
        let mut last = 0.0;
        for carat in [0.5, 0.75, 1.0, 1.5, 2.0, 3.0] {
            let price = estimate_price(&kb, StoneShape::Cushion, carat, Metal::WhiteGold, 1.3, true);
            assert!(price > last, "price must grow with carat ({carat}: {price} <= {last})");
            last = price;
        }
    }

    #[test]
    fn test_carat_exponent_is_superlinear() {
        let kb = KnowledgeBase::builtin();
        let one = estimate_price(&kb, StoneShape::Round, 1.0, Metal::Platinum, 0.0, false);
        let two = estimate_price(&kb, StoneShape::Round, 2.0, Metal::Platinum, 0.0, false);
        // Stone term at 2ct is 2^1.5 ≈ 2.83x the 1ct term
        let stone_one = one - 45.0 * SETTING_MASS_GRAMS;
        let stone_two = two - 45.0 * SETTING_MASS_GRAMS;
        assert!(stone_two > 2.5 * stone_one && stone_two < 3.0 * stone_one);
    }

    #[test]
    fn test_shape_premium_applies_to_stone_term_only() {
        let kb = KnowledgeBase::builtin();
        // marquise premium 0.70 vs round 1.0, same everything else
        let round = estimate_price(&kb, StoneShape::Round, 1.0, Metal::Platinum, 1.0, false);
        let marquise = estimate_price(&kb, StoneShape::Marquise, 1.0, Metal::Platinum, 1.0, false);
        assert_eq!(round2(round - marquise), round2(BASE_STONE_PRICE * 0.30));
    }

    #[test]
    fn test_price_rounded_to_cents() {
        let kb = KnowledgeBase::builtin();
        let price = estimate_price(&kb, StoneShape::Pear, 1.37, Metal::YellowGold, 1.3, true);
        assert_eq!(price, round2(price));
    }

    #[test]
    fn test_fit_carat_to_budget_reference_value() {
        // 10000*0.9 / (8000*1.0) = 1.125 → 1.13 after cent rounding
        assert_eq!(fit_carat_to_budget(10_000.0, 1.0), 1.13);
    }

    #[test]
    fn test_fit_carat_to_budget_floors_at_half_carat() {
        assert_eq!(fit_carat_to_budget(1_000.0, 1.2), 0.5);
    }

    #[test]
    fn test_fit_carat_ignores_non_stone_terms() {
        // The solve only sees the stone term; a full-price recompute at the
        // fitted carat can exceed the budget. Documented behavior.
        let kb = KnowledgeBase::builtin();
        let budget = 6_000.0;
        let carat = fit_carat_to_budget(budget, 1.0);
        let price = estimate_price(&kb, StoneShape::Round, carat, Metal::YellowGold, 1.3, true);
        assert!(price > budget * 0.9 - 1.0, "stone spend should track 90% of budget");
    }
}
