//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use models::{ConfigArgs, ReportArgs};
pub use report::{execute_report, run_report};
pub use utils::{display_config, display_version};
