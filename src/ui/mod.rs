//! UI module for consistent CLI experience
//!
//! Uses `cliclack` for interactive prompts with automatic fallback to plain
//! output in CI/non-interactive environments.

mod context;
mod output;
mod progress;
mod prompts;

pub use context::UiContext;
pub use output::{
    intro, key_value, outro_success, outro_warn, remark, step_info, step_ok, step_warn,
};
pub use progress::TaskSpinner;
pub use prompts::{confirm, input_optional};
