use std::collections::BTreeMap;

use crate::calc::action_time::calculate_action_time;
use crate::calc::berry::calculate_berry_energy;
use crate::calc::constants::SECONDS_PER_DAY;
use crate::calc::ingredient::{calculate_ingredient_counts, ingredient_chance};
use crate::calc::skill::calculate_skill_triggers;
use crate::data::tables::GameTables;
use crate::error::{CalcError, Result};
use crate::models::{DailyResult, HelperProfile, IngredientDaily, NatureModifier, RunConfig};

/// Compute the full daily expectation for one helper configuration.
///
/// The single entry point over the four calculators. Validates the divisor
/// preconditions up front and returns `CalcError::Precondition` instead of
/// producing undefined arithmetic.
pub fn compute_daily_result(
    profile: &HelperProfile,
    nature: &NatureModifier,
    config: &RunConfig,
    tables: &GameTables,
) -> Result<DailyResult> {
    if config.level < 1 {
        return Err(CalcError::Precondition("level must be >= 1".to_string()));
    }
    if config.camp_divisor <= 0.0 {
        return Err(CalcError::Precondition(
            "camp divisor must be > 0".to_string(),
        ));
    }

    let action_time = calculate_action_time(profile, nature, config);
    if action_time.effective <= 0.0 {
        return Err(CalcError::Precondition(format!(
            "effective action time must be > 0, got {}",
            action_time.effective
        )));
    }

    let daily_action_count = SECONDS_PER_DAY / action_time.effective;

    let berry_energy_per_action = calculate_berry_energy(profile, config);
    let berry_energy_per_day_berry_only = berry_energy_per_action * daily_action_count;

    // An action yields either berries or an ingredient proc, never both, so
    // normal-mode berry energy is discounted by the proc chance. Ingredient
    // yield is deliberately not discounted the other way.
    let proc_chance = ingredient_chance(profile, nature, config);
    let berry_energy_per_day = berry_energy_per_day_berry_only * (1.0 - proc_chance);

    let skill_triggers_per_day =
        calculate_skill_triggers(profile, nature, config, daily_action_count);

    let counts = calculate_ingredient_counts(
        profile,
        nature,
        config,
        &tables.base_counts,
        daily_action_count,
    );

    let field_mult = 1.0 + config.field_bonus_percent / 100.0;
    let mut ingredients = BTreeMap::new();
    let mut ingredient_energy_per_day = 0.0;
    for (name, count) in counts {
        let energy = count * tables.energy_values.energy(&name) * field_mult;
        ingredient_energy_per_day += energy;
        ingredients.insert(name, IngredientDaily { count, energy });
    }

    let total_energy_per_day = (berry_energy_per_day + ingredient_energy_per_day).round();

    Ok(DailyResult {
        standard_action_time: action_time.standard,
        effective_action_time: action_time.effective,
        daily_action_count,
        berry_energy_per_day,
        berry_energy_per_day_berry_only,
        skill_triggers_per_day,
        ingredients,
        ingredient_energy_per_day,
        total_energy_per_day,
    })
}
