pub mod calc;
pub mod cli;
pub mod data;
pub mod error;
pub mod interface;
pub mod models;

pub use calc::compute_daily_result;
pub use error::{CalcError, Result};
pub use models::{DailyResult, HelperProfile, NatureModifier, RunConfig};
