use serde::{Deserialize, Serialize};

/// A nature's bundle of four independent multipliers.
///
/// All values are positive; 1.0 means the nature leaves that stat untouched.
/// The genki factor models average energy over a day and scales the effective
/// action time (lower genki = slower helping is already folded into it).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NatureModifier {
    #[serde(rename = "Speed")]
    pub speed: f64,

    #[serde(rename = "Ingredients")]
    pub ingredients: f64,

    #[serde(rename = "Skill")]
    pub skill: f64,

    #[serde(rename = "Genki")]
    pub genki: f64,
}

impl Default for NatureModifier {
    /// Neutral nature: no stat is raised or lowered.
    fn default() -> Self {
        Self {
            speed: 1.0,
            ingredients: 1.0,
            skill: 1.0,
            genki: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_neutral() {
        let nature = NatureModifier::default();
        assert_eq!(nature.speed, 1.0);
        assert_eq!(nature.ingredients, 1.0);
        assert_eq!(nature.skill, 1.0);
        assert_eq!(nature.genki, 1.0);
    }
}
