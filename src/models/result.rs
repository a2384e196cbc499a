use std::collections::BTreeMap;

/// Expected daily output for one ingredient.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngredientDaily {
    /// Expected units gathered per day.
    pub count: f64,

    /// Expected energy contribution per day.
    pub energy: f64,
}

/// The complete result of one daily-rate calculation.
///
/// Produced fresh per request; holds no references back to its inputs.
#[derive(Debug, Clone)]
pub struct DailyResult {
    /// In-game displayed action time (seconds, floor-truncated).
    pub standard_action_time: f64,

    /// Action time after specialty, camp and genki factors (seconds).
    pub effective_action_time: f64,

    /// Help actions per day derived from the effective action time.
    pub daily_action_count: f64,

    /// Berry energy per day, discounted by the ingredient-trigger chance.
    pub berry_energy_per_day: f64,

    /// Berry energy per day assuming every action yields berries.
    pub berry_energy_per_day_berry_only: f64,

    /// Expected main-skill triggers per day.
    pub skill_triggers_per_day: f64,

    /// Per-ingredient expected daily counts and energy, keyed by name.
    pub ingredients: BTreeMap<String, IngredientDaily>,

    /// Summed ingredient energy per day.
    pub ingredient_energy_per_day: f64,

    /// round(berry_energy_per_day + ingredient_energy_per_day).
    pub total_energy_per_day: f64,
}
