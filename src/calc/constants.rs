use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::NatureModifier;

/// Seconds in a full day of helping.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Speed bonus contributed by each team member with a helping bonus.
pub const TEAM_SPEED_BONUS_PER_HELPER: f64 = 0.05;

/// Diminishing-returns ceiling on the combined speed bonus.
pub const SPEED_BONUS_CAP: f64 = 0.35;

/// Linear action-time reduction per level above 1.
pub const LEVEL_TIME_REDUCTION: f64 = 0.002;

/// Action-time factors by EX-trait slot: main shortens, mismatch lengthens.
pub const SPECIALTY_TIME_MAIN: f64 = 0.909;
pub const SPECIALTY_TIME_SUB: f64 = 1.0;
pub const SPECIALTY_TIME_NONE: f64 = 1.15;

/// Compound berry-energy growth per level above 1.
pub const BERRY_GROWTH_RATE: f64 = 1.025;

/// Berry-energy multiplier for an active ExBerry trait.
pub const EX_BERRY_MULT: f64 = 1.2;

/// Skill-rate multiplier for an active ExSkill trait.
pub const EX_SKILL_MULT: f64 = 1.25;

/// Extra ingredients per gathering proc for an active ExIngredient trait.
pub const EX_INGREDIENT_EXTRA: f64 = 1.0;

/// Additional extra per proc when the helper is an ingredient specialist.
pub const EX_INGREDIENT_SPECIALIST_EXTRA: f64 = 0.5;

/// Nature table. Speed multiplies action time (lower = faster); genki is the
/// day-averaged energy factor already folded into the effective time.
pub static NATURE_MODIFIERS: LazyLock<HashMap<&'static str, NatureModifier>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        let nature = |speed, ingredients, skill, genki| NatureModifier {
            speed,
            ingredients,
            skill,
            genki,
        };
        m.insert("bashful", nature(1.0, 1.0, 1.0, 0.48));
        m.insert("lonely", nature(0.9, 1.0, 1.0, 0.45));
        m.insert("adamant", nature(0.9, 0.8, 1.0, 0.48));
        m.insert("naughty", nature(0.9, 1.0, 0.8, 0.48));
        m.insert("brave", nature(0.9, 1.0, 1.0, 0.48));
        m.insert("bold", nature(1.1, 1.0, 1.0, 0.52));
        m.insert("impish", nature(1.1, 1.2, 1.0, 0.48));
        m.insert("careful", nature(1.0, 1.0, 1.2, 0.45));
        m.insert("sassy", nature(1.0, 1.0, 1.2, 0.52));
        m.insert("quiet", nature(1.0, 1.2, 1.0, 0.48));
        m.insert("mild", nature(1.0, 1.2, 0.8, 0.48));
        m.insert("gentle", nature(1.0, 1.0, 1.0, 0.52));
        m
    });

/// Look up a nature by name (case-insensitive), neutral when absent.
pub fn nature_modifier(name: &str) -> NatureModifier {
    NATURE_MODIFIERS
        .get(name.to_lowercase().as_str())
        .copied()
        .unwrap_or_default()
}

/// Known nature names, sorted for stable display.
pub fn nature_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = NATURE_MODIFIERS.keys().copied().collect();
    names.sort_unstable();
    names
}
