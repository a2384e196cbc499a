use serde::{Deserialize, Serialize};

/// Which output category a helper's stats lean toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Specialty {
    Berries,
    Ingredients,
    Skills,
    /// Balanced across all three categories.
    All,
    None,
}

/// An ingredient slot unlocked at a fixed level threshold (1, 30 or 60).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientSlot {
    #[serde(rename = "Ingredient")]
    pub ingredient: String,

    #[serde(rename = "UnlockLevel")]
    pub unlock_level: u32,
}

/// A helper's static per-species stats.
///
/// Built from the roster table keyed by name; never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelperProfile {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Specialty")]
    pub specialty: Specialty,

    /// Base seconds per help action at level 1, before any modifiers.
    #[serde(rename = "BaseActionTime")]
    pub base_action_time: f64,

    /// Energy of one berry at level 1.
    #[serde(rename = "BaseBerryEnergy")]
    pub base_berry_energy: f64,

    /// Berries carried per help action, before specialty/skill extras.
    #[serde(rename = "BaseBerryCount", default = "default_berry_count")]
    pub base_berry_count: u32,

    /// Probability that a help action triggers ingredient gathering.
    #[serde(rename = "BaseIngredientRate")]
    pub base_ingredient_rate: f64,

    /// Probability that a help action triggers the main skill.
    #[serde(rename = "BaseSkillRate")]
    pub base_skill_rate: f64,

    /// Ingredient slots unlocked at levels 1/30/60.
    #[serde(rename = "Slots", default)]
    pub slots: Vec<IngredientSlot>,
}

fn default_berry_count() -> u32 {
    1
}

impl HelperProfile {
    /// Berry specialists carry one extra berry per action.
    #[inline]
    pub fn is_berry_specialist(&self) -> bool {
        matches!(self.specialty, Specialty::Berries | Specialty::All)
    }

    #[inline]
    pub fn is_ingredient_specialist(&self) -> bool {
        matches!(self.specialty, Specialty::Ingredients | Specialty::All)
    }

    /// Slots usable at the given level. The level-1 slot is always included
    /// when defined; later slots require the matching threshold.
    pub fn unlocked_slots(&self, level: u32) -> Vec<&IngredientSlot> {
        self.slots
            .iter()
            .filter(|s| level >= s.unlock_level)
            .collect()
    }

    /// Basic validation: positive timings and rates in [0, 1].
    pub fn is_valid(&self) -> bool {
        self.base_action_time > 0.0
            && self.base_berry_energy >= 0.0
            && (0.0..=1.0).contains(&self.base_ingredient_rate)
            && (0.0..=1.0).contains(&self.base_skill_rate)
            && self.slots.iter().all(|s| [1, 30, 60].contains(&s.unlock_level))
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
