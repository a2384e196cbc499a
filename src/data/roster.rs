use std::collections::HashMap;

use crate::error::{CalcError, Result};
use crate::models::{HelperProfile, IngredientSlot, Specialty};

/// Helper profiles keyed by lowercase name.
pub struct HelperRoster {
    helpers: HashMap<String, HelperProfile>,
}

impl HelperRoster {
    /// Build a roster from a list of profiles.
    pub fn new(helpers: Vec<HelperProfile>) -> Self {
        let mut map = HashMap::new();
        for helper in helpers {
            map.insert(helper.key(), helper);
        }
        Self { helpers: map }
    }

    /// Get a helper by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&HelperProfile> {
        self.helpers.get(&name.to_lowercase())
    }

    /// Get a helper by name or fail with `HelperNotFound`.
    pub fn require(&self, name: &str) -> Result<&HelperProfile> {
        self.get(name)
            .ok_or_else(|| CalcError::HelperNotFound(name.to_string()))
    }

    /// All profiles, sorted by name for stable display.
    pub fn all(&self) -> Vec<&HelperProfile> {
        let mut helpers: Vec<&HelperProfile> = self.helpers.values().collect();
        helpers.sort_by(|a, b| a.name.cmp(&b.name));
        helpers
    }

    /// Display names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.all().iter().map(|h| h.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }
}

/// The built-in roster matching the built-in game tables.
pub fn builtin_roster() -> HelperRoster {
    let slot = |ingredient: &str, unlock_level: u32| IngredientSlot {
        ingredient: ingredient.to_string(),
        unlock_level,
    };
    let profile = |name: &str,
                   specialty: Specialty,
                   base_action_time: f64,
                   base_berry_energy: f64,
                   base_ingredient_rate: f64,
                   base_skill_rate: f64,
                   slots: Vec<IngredientSlot>| HelperProfile {
        name: name.to_string(),
        specialty,
        base_action_time,
        base_berry_energy,
        base_berry_count: 1,
        base_ingredient_rate,
        base_skill_rate,
        slots,
    };

    HelperRoster::new(vec![
        profile(
            "Bulbasaur",
            Specialty::Ingredients,
            4400.0,
            17.0,
            0.257,
            0.019,
            vec![slot("honey", 1), slot("honey", 30), slot("snoozy tomato", 60)],
        ),
        profile(
            "Charmander",
            Specialty::Ingredients,
            3500.0,
            14.0,
            0.201,
            0.022,
            vec![
                slot("bean sausage", 1),
                slot("warming ginger", 30),
                slot("fiery herb", 60),
            ],
        ),
        profile(
            "Squirtle",
            Specialty::Ingredients,
            4500.0,
            16.0,
            0.271,
            0.02,
            vec![
                slot("moomoo milk", 1),
                slot("soft potato", 30),
                slot("bean sausage", 60),
            ],
        ),
        profile(
            "Pikachu",
            Specialty::Berries,
            2700.0,
            28.0,
            0.21,
            0.031,
            vec![
                slot("fancy apple", 1),
                slot("warming ginger", 30),
                slot("fancy apple", 60),
            ],
        ),
        profile(
            "Eevee",
            Specialty::Skills,
            3700.0,
            23.0,
            0.205,
            0.055,
            vec![
                slot("moomoo milk", 1),
                slot("moomoo milk", 30),
                slot("moomoo milk", 60),
            ],
        ),
    ])
}
