use assert_float_eq::*;

use sleep_helper_calc_rs::calc::constants::nature_modifier;
use sleep_helper_calc_rs::calc::{compute_daily_result, ingredient_chance};
use sleep_helper_calc_rs::data::{builtin_roster, builtin_tables};
use sleep_helper_calc_rs::error::CalcError;
use sleep_helper_calc_rs::models::{ActivationMode, BonusTarget, RunConfig};

#[test]
fn test_end_to_end_over_builtin_data() {
    let roster = builtin_roster();
    let tables = builtin_tables();
    let nature = nature_modifier("bashful");

    let config = RunConfig {
        level: 60,
        sub_speed_bonus: 0.07,
        sub_ingredient_bonus: 0.18,
        team_helper_count: 2,
        camp_divisor: 1.2,
        activation: ActivationMode::Main,
        bonus_target: BonusTarget::ExIngredient,
        ..Default::default()
    };

    for helper in roster.all() {
        let result = compute_daily_result(helper, &nature, &config, &tables).unwrap();

        assert!(result.standard_action_time > 0.0, "{}", helper.name);
        assert!(result.effective_action_time > 0.0, "{}", helper.name);
        assert!(result.daily_action_count > 0.0, "{}", helper.name);
        assert!(result.berry_energy_per_day > 0.0, "{}", helper.name);
        assert!(
            result.berry_energy_per_day < result.berry_energy_per_day_berry_only,
            "{}",
            helper.name
        );
        assert!(result.skill_triggers_per_day > 0.0, "{}", helper.name);

        // All built-in helpers have three slots unlocked at level 60.
        assert!(!result.ingredients.is_empty(), "{}", helper.name);
        assert!(result.ingredient_energy_per_day > 0.0, "{}", helper.name);

        let summed: f64 = result.ingredients.values().map(|d| d.energy).sum();
        assert_float_absolute_eq!(result.ingredient_energy_per_day, summed, 1e-6);
        assert_f64_near!(
            result.total_energy_per_day,
            (result.berry_energy_per_day + result.ingredient_energy_per_day).round()
        );
    }
}

#[test]
fn test_idempotent_for_identical_inputs() {
    let roster = builtin_roster();
    let tables = builtin_tables();
    let helper = roster.require("Bulbasaur").unwrap();
    let nature = nature_modifier("impish");
    let config = RunConfig {
        level: 42,
        sub_ingredient_bonus: 0.36,
        ..Default::default()
    };

    let first = compute_daily_result(helper, &nature, &config, &tables).unwrap();
    let second = compute_daily_result(helper, &nature, &config, &tables).unwrap();

    assert_eq!(first.standard_action_time, second.standard_action_time);
    assert_eq!(first.effective_action_time, second.effective_action_time);
    assert_eq!(first.daily_action_count, second.daily_action_count);
    assert_eq!(first.berry_energy_per_day, second.berry_energy_per_day);
    assert_eq!(
        first.berry_energy_per_day_berry_only,
        second.berry_energy_per_day_berry_only
    );
    assert_eq!(first.skill_triggers_per_day, second.skill_triggers_per_day);
    assert_eq!(first.ingredient_energy_per_day, second.ingredient_energy_per_day);
    assert_eq!(first.total_energy_per_day, second.total_energy_per_day);
    assert_eq!(first.ingredients.len(), second.ingredients.len());
    for (name, daily) in &first.ingredients {
        let other = &second.ingredients[name];
        assert_eq!(daily.count, other.count);
        assert_eq!(daily.energy, other.energy);
    }
}

#[test]
fn test_berry_discount_is_one_sided() {
    // Normal-mode berry energy is discounted by the ingredient-proc chance;
    // ingredient yield stays undiscounted by any berry chance.
    let roster = builtin_roster();
    let tables = builtin_tables();
    let helper = roster.require("Squirtle").unwrap();
    let nature = nature_modifier("quiet");
    let config = RunConfig {
        level: 30,
        ..Default::default()
    };

    let result = compute_daily_result(helper, &nature, &config, &tables).unwrap();
    let chance = ingredient_chance(helper, &nature, &config);

    assert_float_absolute_eq!(
        result.berry_energy_per_day,
        result.berry_energy_per_day_berry_only * (1.0 - chance),
        1e-6
    );

    // Doubling the proc chance via a sub-skill scales ingredient counts by
    // exactly the chance ratio, with no complementary berry-side factor.
    let boosted_config = RunConfig {
        sub_ingredient_bonus: 1.0,
        ..config.clone()
    };
    let boosted = compute_daily_result(helper, &nature, &boosted_config, &tables).unwrap();
    for (name, daily) in &result.ingredients {
        assert_float_absolute_eq!(boosted.ingredients[name].count, daily.count * 2.0, 1e-6);
    }
}

#[test]
fn test_preconditions_reported_not_panicked() {
    let roster = builtin_roster();
    let tables = builtin_tables();
    let helper = roster.require("Eevee").unwrap();
    let nature = nature_modifier("bashful");

    let zero_camp = RunConfig {
        camp_divisor: 0.0,
        ..Default::default()
    };
    assert!(matches!(
        compute_daily_result(helper, &nature, &zero_camp, &tables),
        Err(CalcError::Precondition(_))
    ));

    let zero_level = RunConfig {
        level: 0,
        ..Default::default()
    };
    assert!(matches!(
        compute_daily_result(helper, &nature, &zero_level, &tables),
        Err(CalcError::Precondition(_))
    ));
}

#[test]
fn test_unknown_nature_uses_neutral_fallback() {
    let roster = builtin_roster();
    let tables = builtin_tables();
    let helper = roster.require("Pikachu").unwrap();
    let config = RunConfig::default();

    let fallback = nature_modifier("definitely-not-a-nature");
    let result = compute_daily_result(helper, &fallback, &config, &tables).unwrap();

    // Neutral genki 1.0: effective time = standard * 1.15.
    assert_float_absolute_eq!(
        result.effective_action_time,
        result.standard_action_time * 1.15,
        1e-9
    );
}
