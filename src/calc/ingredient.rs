use std::collections::BTreeMap;

use crate::calc::constants::*;
use crate::data::tables::IngredientBaseCounts;
use crate::models::{BonusTarget, HelperProfile, NatureModifier, RunConfig};

/// Probability that one action triggers ingredient gathering.
pub fn ingredient_chance(
    profile: &HelperProfile,
    nature: &NatureModifier,
    config: &RunConfig,
) -> f64 {
    profile.base_ingredient_rate * nature.ingredients * (1.0 + config.sub_ingredient_bonus)
}

/// Extra ingredients added to each gathering proc by an active ExIngredient
/// trait; zero otherwise.
pub fn extra_count_per_proc(profile: &HelperProfile, config: &RunConfig) -> f64 {
    if config.bonus_target == BonusTarget::ExIngredient && config.activation.is_active() {
        let specialist_extra = if profile.is_ingredient_specialist() {
            EX_INGREDIENT_SPECIALIST_EXTRA
        } else {
            0.0
        };
        EX_INGREDIENT_EXTRA + specialist_extra
    } else {
        0.0
    }
}

/// Expected daily count per distinct ingredient across the unlocked slots.
///
/// Each proc picks one unlocked slot uniformly, so an ingredient's expectation
/// is its summed base counts (plus per-slot extras) weighted by 1/slot_count.
/// Returns an empty map when no slot is unlocked; the slot-count division only
/// happens past that early return.
pub fn calculate_ingredient_counts(
    profile: &HelperProfile,
    nature: &NatureModifier,
    config: &RunConfig,
    base_counts: &IngredientBaseCounts,
    daily_action_count: f64,
) -> BTreeMap<String, f64> {
    let slots = profile.unlocked_slots(config.level);
    if slots.is_empty() {
        return BTreeMap::new();
    }

    let chance = ingredient_chance(profile, nature, config);
    let extra = extra_count_per_proc(profile, config);
    let slot_count = slots.len() as f64;

    // Summed base count and slot occurrences per distinct ingredient.
    let mut tally: BTreeMap<&str, (f64, u32)> = BTreeMap::new();
    for slot in &slots {
        let base = base_counts.base_count(&profile.name, &slot.ingredient, slot.unlock_level);
        let entry = tally.entry(slot.ingredient.as_str()).or_default();
        entry.0 += base;
        entry.1 += 1;
    }

    tally
        .into_iter()
        .map(|(ingredient, (summed_base, occurrences))| {
            let per_action =
                chance * (1.0 / slot_count) * (summed_base + occurrences as f64 * extra);
            (ingredient.to_string(), per_action * daily_action_count)
        })
        .collect()
}
