use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::HelperProfile;

/// Load helper profiles from a JSON file.
///
/// Deduplicates by lowercase name (last occurrence wins).
pub fn load_helpers<P: AsRef<Path>>(path: P) -> Result<Vec<HelperProfile>> {
    let content = fs::read_to_string(path)?;
    let helpers: Vec<HelperProfile> = serde_json::from_str(&content)?;

    let mut seen: HashMap<String, HelperProfile> = HashMap::new();
    for helper in helpers {
        seen.insert(helper.key(), helper);
    }

    Ok(seen.into_values().collect())
}

/// Save helper profiles to a JSON file, deduplicated by lowercase name.
pub fn save_helpers<P: AsRef<Path>>(path: P, helpers: &[HelperProfile]) -> Result<()> {
    let mut seen: HashMap<String, &HelperProfile> = HashMap::new();
    for helper in helpers {
        seen.insert(helper.key(), helper);
    }

    let deduped: Vec<&HelperProfile> = seen.into_values().collect();
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}
