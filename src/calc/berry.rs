use crate::calc::constants::*;
use crate::models::{BonusTarget, HelperProfile, RunConfig};

/// Level-grown berry energy: the greater of the linear and compound models.
///
/// Compound growth dominates at high level, linear at low level; the max of
/// the two is taken at every level rather than switching at a threshold.
pub fn berry_growth(base_berry_energy: f64, level: u32) -> f64 {
    let steps = level.saturating_sub(1);
    let linear = base_berry_energy + steps as f64;
    let compound = base_berry_energy * BERRY_GROWTH_RATE.powi(steps as i32);
    linear.max(compound)
}

/// Berries carried per action: base plus one for berry specialists plus any
/// extra from a berry-finding skill.
pub fn berry_count(profile: &HelperProfile, config: &RunConfig) -> u32 {
    profile.base_berry_count + u32::from(profile.is_berry_specialist()) + config.extra_berry_count
}

/// Energy yield of a single berry-producing action.
pub fn calculate_berry_energy(profile: &HelperProfile, config: &RunConfig) -> f64 {
    let mut energy = berry_growth(profile.base_berry_energy, config.level);
    energy *= config.field_berry_affinity;

    if config.bonus_target == BonusTarget::ExBerry && config.activation.is_active() {
        energy *= EX_BERRY_MULT;
    }

    energy *= 1.0 + config.field_bonus_percent / 100.0;

    // Per-berry energy is displayed rounded; the count multiplies after.
    energy.round() * berry_count(profile, config) as f64
}
