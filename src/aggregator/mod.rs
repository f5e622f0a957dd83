//! Aggregation of time tracking data.
//!
//! This module folds parsed events into:
//! - Per-discussion, per-issue and per-sprint ledgers
//! - An overall per-contributor ledger
//! - Attendance time routed into the sprint active on each date

pub mod ledger;
pub mod sprint;
pub mod tracker;

// Re-export main types and functions
pub use ledger::TimeLedger;
pub use sprint::{resolve_sprint, resolve_sprint_index, select_sprints, Sprint};
pub use tracker::{
    aggregate_discussion, aggregate_issue, aggregate_sprint, build_report, SprintTotals, TimeReport,
};
