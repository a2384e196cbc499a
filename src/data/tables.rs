use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Per-helper, per-ingredient, per-unlock-level base counts.
///
/// Keyed helper name -> ingredient name -> unlock level -> count, all names
/// lowercase. Read-only for the lifetime of the process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientBaseCounts(HashMap<String, HashMap<String, HashMap<u32, f64>>>);

impl IngredientBaseCounts {
    /// Base count for one slot; 0.0 when the table has no entry.
    pub fn base_count(&self, helper: &str, ingredient: &str, unlock_level: u32) -> f64 {
        self.0
            .get(&helper.to_lowercase())
            .and_then(|by_ingredient| by_ingredient.get(&ingredient.to_lowercase()))
            .and_then(|by_level| by_level.get(&unlock_level))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn insert(&mut self, helper: &str, ingredient: &str, unlock_level: u32, count: f64) {
        self.0
            .entry(helper.to_lowercase())
            .or_default()
            .entry(ingredient.to_lowercase())
            .or_default()
            .insert(unlock_level, count);
    }
}

/// Energy per unit of each ingredient, keyed by lowercase name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientEnergyValues(HashMap<String, f64>);

impl IngredientEnergyValues {
    /// Energy per unit; 0.0 when the table has no entry.
    pub fn energy(&self, ingredient: &str) -> f64 {
        self.0
            .get(&ingredient.to_lowercase())
            .copied()
            .unwrap_or(0.0)
    }

    pub fn insert(&mut self, ingredient: &str, energy: f64) {
        self.0.insert(ingredient.to_lowercase(), energy);
    }
}

/// The two static lookups the calculation core reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameTables {
    #[serde(rename = "IngredientBaseCounts")]
    pub base_counts: IngredientBaseCounts,

    #[serde(rename = "IngredientEnergyValues")]
    pub energy_values: IngredientEnergyValues,
}

impl Default for GameTables {
    fn default() -> Self {
        builtin_tables()
    }
}

/// Load game tables from a JSON file, replacing the built-in data.
pub fn load_tables<P: AsRef<Path>>(path: P) -> Result<GameTables> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Built-in tables matching the built-in roster.
pub fn builtin_tables() -> GameTables {
    let mut energy_values = IngredientEnergyValues::default();
    for (name, energy) in [
        ("honey", 101.0),
        ("fancy apple", 90.0),
        ("bean sausage", 103.0),
        ("moomoo milk", 98.0),
        ("soft potato", 124.0),
        ("warming ginger", 109.0),
        ("snoozy tomato", 110.0),
        ("fiery herb", 130.0),
        ("greengrass soybeans", 100.0),
        ("tasty mushroom", 167.0),
        ("pure oil", 121.0),
    ] {
        energy_values.insert(name, energy);
    }

    let mut base_counts = IngredientBaseCounts::default();
    for (helper, ingredient, unlock_level, count) in [
        ("bulbasaur", "honey", 1, 2.0),
        ("bulbasaur", "honey", 30, 5.0),
        ("bulbasaur", "snoozy tomato", 60, 7.0),
        ("charmander", "bean sausage", 1, 2.0),
        ("charmander", "warming ginger", 30, 4.0),
        ("charmander", "fiery herb", 60, 6.0),
        ("squirtle", "moomoo milk", 1, 2.0),
        ("squirtle", "soft potato", 30, 5.0),
        ("squirtle", "bean sausage", 60, 7.0),
        ("pikachu", "fancy apple", 1, 1.0),
        ("pikachu", "warming ginger", 30, 2.0),
        ("pikachu", "fancy apple", 60, 4.0),
        ("eevee", "moomoo milk", 1, 1.0),
        ("eevee", "moomoo milk", 30, 2.0),
        ("eevee", "moomoo milk", 60, 4.0),
    ] {
        base_counts.insert(helper, ingredient, unlock_level, count);
    }

    GameTables {
        base_counts,
        energy_values,
    }
}
