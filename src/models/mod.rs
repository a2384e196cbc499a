pub mod config;
pub mod nature;
pub mod profile;
pub mod result;

pub use config::{ActivationMode, BonusTarget, RunConfig};
pub use nature::NatureModifier;
pub use profile::{HelperProfile, IngredientSlot, Specialty};
pub use result::{DailyResult, IngredientDaily};
