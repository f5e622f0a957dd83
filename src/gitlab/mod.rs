//! GitLab API access.
//!
//! The aggregation core only sees the `ProjectSource` trait;
//! `GitLabClient` implements it over HTTP.

pub mod client;
pub mod source;
pub mod types;

// Re-export main types
pub use client::GitLabClient;
pub use source::ProjectSource;
pub use types::{Author, Discussion, Issue, Milestone, Note, WikiPage};
