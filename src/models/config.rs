/// Whether the bonus-granting EX trait is the helper's primary or secondary
/// specialization, or absent entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationMode {
    Main,
    Sub,
    None,
}

impl ActivationMode {
    /// The trait only grants its bonus as a main or sub specialization.
    #[inline]
    pub fn is_active(self) -> bool {
        !matches!(self, ActivationMode::None)
    }
}

/// Which output category an available EX trait amplifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusTarget {
    None,
    ExBerry,
    ExIngredient,
    ExSkill,
}

/// One calculation request: everything about the helper's current build that
/// is not part of the static species profile.
///
/// Built once per request and never mutated during the calculation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Helper level, >= 1.
    pub level: u32,

    /// Fractional help-speed bonus from sub-skills (0.07 = 7% faster).
    pub sub_speed_bonus: f64,

    /// Fractional ingredient-chance bonus from sub-skills.
    pub sub_ingredient_bonus: f64,

    /// Fractional skill-trigger bonus from sub-skills.
    pub sub_skill_bonus: f64,

    /// Team members contributing a Helping Bonus, 0.05 speed each.
    pub team_helper_count: u32,

    /// Field event bonus applied to all energy, in percent.
    pub field_bonus_percent: f64,

    /// Field affinity multiplier for the helper's berry.
    pub field_berry_affinity: f64,

    /// Camp action-time divisor, > 0 (1.0 = no camp, 1.2 = camp ticket).
    pub camp_divisor: f64,

    /// How the EX trait is slotted on this helper.
    pub activation: ActivationMode,

    /// Which category the EX trait boosts.
    pub bonus_target: BonusTarget,

    /// Extra berries per action from a berry-finding skill.
    pub extra_berry_count: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            level: 1,
            sub_speed_bonus: 0.0,
            sub_ingredient_bonus: 0.0,
            sub_skill_bonus: 0.0,
            team_helper_count: 0,
            field_bonus_percent: 0.0,
            field_berry_affinity: 1.0,
            camp_divisor: 1.0,
            activation: ActivationMode::None,
            bonus_target: BonusTarget::None,
            extra_berry_count: 0,
        }
    }
}
