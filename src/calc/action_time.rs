use crate::calc::constants::*;
use crate::models::{ActivationMode, HelperProfile, NatureModifier, RunConfig};

/// Per-action durations in seconds.
#[derive(Debug, Clone, Copy)]
pub struct ActionTime {
    /// In-game displayed value, truncated toward zero.
    pub standard: f64,

    /// Standard time after specialty, camp and genki factors.
    pub effective: f64,
}

/// Combined fractional speed bonus from sub-skills and team helpers,
/// capped at SPEED_BONUS_CAP.
pub fn total_speed_bonus(config: &RunConfig) -> f64 {
    let raw =
        config.sub_speed_bonus + config.team_helper_count as f64 * TEAM_SPEED_BONUS_PER_HELPER;
    raw.min(SPEED_BONUS_CAP)
}

/// Action-time factor for how the EX trait is slotted.
pub fn specialty_time_factor(activation: ActivationMode) -> f64 {
    match activation {
        ActivationMode::Main => SPECIALTY_TIME_MAIN,
        ActivationMode::Sub => SPECIALTY_TIME_SUB,
        ActivationMode::None => SPECIALTY_TIME_NONE,
    }
}

/// Standard and effective per-action durations.
///
/// The level factor has no lower floor; callers keep the level in a sane
/// range. `config.camp_divisor` must be non-zero.
pub fn calculate_action_time(
    profile: &HelperProfile,
    nature: &NatureModifier,
    config: &RunConfig,
) -> ActionTime {
    let speed_factor = 1.0 - total_speed_bonus(config);
    let level_factor = 1.0 - config.level.saturating_sub(1) as f64 * LEVEL_TIME_REDUCTION;

    let standard = (profile.base_action_time * level_factor * nature.speed * speed_factor).trunc();

    let effective = standard
        * specialty_time_factor(config.activation)
        * (1.0 / config.camp_divisor)
        * nature.genki;

    ActionTime { standard, effective }
}
