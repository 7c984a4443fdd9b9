//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod check;
pub mod models;
pub mod plan;
pub mod utils;

// Re-export main command functions
pub use check::{execute_check, print_report, render_report, CheckReport};
pub use models::{CheckArgs, PlanArgs};
pub use plan::{execute_plan, render_summary, validate_args};
pub use utils::{display_schema, display_version};
