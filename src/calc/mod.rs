pub mod action_time;
pub mod berry;
pub mod constants;
pub mod daily;
pub mod ingredient;
pub mod skill;

pub use action_time::{calculate_action_time, specialty_time_factor, total_speed_bonus, ActionTime};
pub use berry::{berry_count, berry_growth, calculate_berry_energy};
pub use constants::*;
pub use daily::compute_daily_result;
pub use ingredient::{calculate_ingredient_counts, extra_count_per_proc, ingredient_chance};
pub use skill::calculate_skill_triggers;
