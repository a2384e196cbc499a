use assert_float_eq::*;

use sleep_helper_calc_rs::calc::{
    berry_growth, calculate_action_time, calculate_berry_energy, calculate_ingredient_counts,
    calculate_skill_triggers, ingredient_chance, total_speed_bonus, BERRY_GROWTH_RATE,
    SPEED_BONUS_CAP,
};
use sleep_helper_calc_rs::data::builtin_tables;
use sleep_helper_calc_rs::models::{
    HelperProfile, IngredientSlot, NatureModifier, RunConfig, Specialty,
};

fn make_helper(name: &str, specialty: Specialty, base_action_time: f64) -> HelperProfile {
    HelperProfile {
        name: name.to_string(),
        specialty,
        base_action_time,
        base_berry_energy: 20.0,
        base_berry_count: 1,
        base_ingredient_rate: 0.2,
        base_skill_rate: 0.02,
        slots: Vec::new(),
    }
}

#[test]
fn test_speed_bonus_never_exceeds_cap() {
    for sub_percent in 0..=50 {
        for team in 0..=5 {
            let config = RunConfig {
                sub_speed_bonus: sub_percent as f64 / 100.0,
                team_helper_count: team,
                ..Default::default()
            };
            let bonus = total_speed_bonus(&config);
            assert!(
                bonus <= SPEED_BONUS_CAP + 1e-12,
                "bonus {} over cap for sub {}%, team {}",
                bonus,
                sub_percent,
                team
            );
        }
    }
}

#[test]
fn test_standard_time_integral_and_bounded() {
    let helper = make_helper("Tester", Specialty::None, 2400.0);
    let nature = NatureModifier {
        speed: 0.9,
        ..Default::default()
    };

    for level in 1..=60 {
        let config = RunConfig {
            level,
            sub_speed_bonus: 0.07,
            team_helper_count: 1,
            ..Default::default()
        };
        let time = calculate_action_time(&helper, &nature, &config);

        let unrounded = helper.base_action_time
            * (1.0 - (level - 1) as f64 * 0.002)
            * nature.speed
            * (1.0 - total_speed_bonus(&config));

        assert_eq!(time.standard, time.standard.trunc());
        assert!(time.standard <= unrounded);
    }
}

#[test]
fn test_standard_time_monotone_in_level() {
    let helper = make_helper("Tester", Specialty::None, 3100.0);
    let nature = NatureModifier::default();

    let mut previous = f64::MAX;
    for level in 1..=75 {
        let config = RunConfig {
            level,
            ..Default::default()
        };
        let time = calculate_action_time(&helper, &nature, &config);
        assert!(time.standard <= previous);
        previous = time.standard;
    }
}

#[test]
fn test_growth_equals_max_of_both_models() {
    for level in 1..=120 {
        let base = 26.0;
        let linear = base + (level - 1) as f64;
        let compound = base * BERRY_GROWTH_RATE.powi(level as i32 - 1);
        assert_f64_near!(berry_growth(base, level), linear.max(compound));
    }
}

#[test]
fn test_growth_models_meet_at_level_one() {
    for base in [17.0, 20.0, 28.0, 35.0] {
        assert_f64_near!(berry_growth(base, 1), base);
    }
}

#[test]
fn test_reference_action_time_example() {
    // base 2400, level 1, neutral speed, genki 0.48, no speed bonuses,
    // unslotted trait (1.15), no camp.
    let helper = make_helper("Tester", Specialty::None, 2400.0);
    let nature = NatureModifier {
        genki: 0.48,
        ..Default::default()
    };
    let config = RunConfig::default();

    let time = calculate_action_time(&helper, &nature, &config);
    assert_f64_near!(time.standard, 2400.0);
    assert_float_absolute_eq!(time.effective, 1324.8, 1e-9);
}

#[test]
fn test_reference_berry_example() {
    // base 20, level 1, affinity 1.0, no bonuses, single berry -> 20 energy.
    let helper = make_helper("Tester", Specialty::None, 2400.0);
    let config = RunConfig::default();
    assert_f64_near!(calculate_berry_energy(&helper, &config), 20.0);
}

#[test]
fn test_no_defined_slots_yields_nothing() {
    let helper = make_helper("Tester", Specialty::None, 2400.0);
    let tables = builtin_tables();

    let counts = calculate_ingredient_counts(
        &helper,
        &NatureModifier::default(),
        &RunConfig::default(),
        &tables.base_counts,
        60.0,
    );
    assert!(counts.is_empty());
}

#[test]
fn test_locked_slots_yield_nothing_below_unlock() {
    let mut helper = make_helper("Tester", Specialty::None, 2400.0);
    helper.slots = vec![IngredientSlot {
        ingredient: "honey".to_string(),
        unlock_level: 30,
    }];
    let tables = builtin_tables();

    let counts = calculate_ingredient_counts(
        &helper,
        &NatureModifier::default(),
        &RunConfig::default(), // level 1
        &tables.base_counts,
        60.0,
    );
    assert!(counts.is_empty());
}

#[test]
fn test_skill_triggers_linear_in_actions() {
    let helper = make_helper("Tester", Specialty::Skills, 3700.0);
    let nature = NatureModifier {
        skill: 1.2,
        ..Default::default()
    };
    let config = RunConfig {
        sub_skill_bonus: 0.36,
        ..Default::default()
    };

    let base = calculate_skill_triggers(&helper, &nature, &config, 1.0);
    for actions in [5.0, 17.5, 64.0, 120.0] {
        let triggers = calculate_skill_triggers(&helper, &nature, &config, actions);
        assert_float_absolute_eq!(triggers, base * actions, 1e-9);
    }
}

#[test]
fn test_ingredient_chance_matches_discount_factors() {
    let helper = make_helper("Tester", Specialty::None, 2400.0);
    let nature = NatureModifier {
        ingredients: 0.8,
        ..Default::default()
    };
    let config = RunConfig {
        sub_ingredient_bonus: 0.18,
        ..Default::default()
    };

    let chance = ingredient_chance(&helper, &nature, &config);
    assert_float_absolute_eq!(chance, 0.2 * 0.8 * 1.18, 1e-12);
}
