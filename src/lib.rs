//! Sprint Time Tracker
//!
//! Aggregates GitLab time tracking notes ("added 1h 30m of time spent",
//! "removed time spent") per contributor and per sprint milestone, and
//! merges lab session attendance tables from a wiki page into the same
//! totals.
//!
//! This crate provides the core implementation for the
//! `sprint-time` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! sprint-time report --config config.toml
//! sprint-time --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod gitlab;
pub mod output;
pub mod parser;
pub mod utils;
