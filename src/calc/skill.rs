use crate::calc::constants::EX_SKILL_MULT;
use crate::models::{BonusTarget, HelperProfile, NatureModifier, RunConfig};

/// Expected main-skill triggers over `daily_action_count` actions.
pub fn calculate_skill_triggers(
    profile: &HelperProfile,
    nature: &NatureModifier,
    config: &RunConfig,
    daily_action_count: f64,
) -> f64 {
    let ex_factor = if config.bonus_target == BonusTarget::ExSkill && config.activation.is_active()
    {
        EX_SKILL_MULT
    } else {
        1.0
    };

    let final_rate =
        profile.base_skill_rate * nature.skill * (1.0 + config.sub_skill_bonus) * ex_factor;
    daily_action_count * final_rate
}
