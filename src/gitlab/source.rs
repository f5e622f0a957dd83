//! The data source seam between the aggregation core and GitLab.

use super::types::{Discussion, Issue, Milestone, WikiPage};
use crate::utils::error::GitLabError;

/// Everything the tracker needs to read from a project
///
/// Each call returns the complete result set. `GitLabClient` is the
/// production implementation; tests use in-memory fixtures.
pub trait ProjectSource {
    /// All milestones of the project, in API order
    fn milestones(&self) -> Result<Vec<Milestone>, GitLabError>;

    /// All issues assigned to a milestone
    fn milestone_issues(&self, milestone: &Milestone) -> Result<Vec<Issue>, GitLabError>;

    /// All discussion threads on an issue, with their notes
    fn issue_discussions(&self, issue: &Issue) -> Result<Vec<Discussion>, GitLabError>;

    /// A single wiki page, by slug
    fn wiki_page(&self, slug: &str) -> Result<WikiPage, GitLabError>;
}
