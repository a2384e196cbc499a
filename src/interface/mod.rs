pub mod prompts;
pub mod render;

pub use prompts::{collect_run_config, prompt_helper_name, prompt_nature};
pub use render::{display_daily_result, display_helper_list, display_nature_list};
