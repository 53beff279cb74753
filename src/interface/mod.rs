pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_action, prompt_budget, prompt_category, prompt_entry_field, prompt_entry_pick,
    prompt_entry_value, prompt_yes_no, Action,
};
pub use render::{display_form, display_summary, format_calories};
