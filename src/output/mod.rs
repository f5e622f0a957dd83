//! Report output.
//!
//! This module handles:
//! - Rendering a time report as Markdown tables
//! - Writing the rendered report to disk

pub mod file;
pub mod markdown;

// Re-export main functions
pub use file::{validate_path, write_report};
pub use markdown::{format_duration, render_overall, render_per_sprint, render_report};
