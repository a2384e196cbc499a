pub mod persistence;
pub mod roster;
pub mod tables;

pub use persistence::{load_helpers, save_helpers};
pub use roster::{builtin_roster, HelperRoster};
pub use tables::{builtin_tables, load_tables, GameTables};
