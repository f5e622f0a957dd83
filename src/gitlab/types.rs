//! Types for the subset of the GitLab REST API v4 we read.
//!
//! Only the fields the tracker needs are declared; serde ignores the rest.

use chrono::NaiveDate;
use serde::Deserialize;

/// A project milestone (sprints are milestones)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Milestone {
    /// Global milestone id, used in `/milestones/:id/issues`
    pub id: u64,

    #[serde(default)]
    pub iid: u64,

    pub title: String,

    /// `YYYY-MM-DD`, null when the milestone has no start date
    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    /// `YYYY-MM-DD`, null when the milestone has no due date
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// An issue assigned to a milestone
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Issue {
    pub id: u64,

    /// Project-scoped issue number, used in `/issues/:iid/discussions`
    pub iid: u64,

    #[serde(default)]
    pub title: String,
}

/// A discussion thread on an issue
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Discussion {
    pub id: String,

    #[serde(default)]
    pub notes: Vec<Note>,
}

/// A single comment (or system note) inside a discussion
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Note {
    #[serde(default)]
    pub id: u64,

    pub author: Author,

    #[serde(default)]
    pub body: String,

    /// True for notes generated by GitLab (time tracking notes are system notes)
    #[serde(default)]
    pub system: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Author {
    /// Display name, e.g. "John Smith"
    pub name: String,

    #[serde(default)]
    pub username: String,
}

/// A wiki page with its raw markup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WikiPage {
    pub slug: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub content: String,
}

/// Error body GitLab returns on failed requests
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<serde_json::Value>,

    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Best human-readable description of the failure
    pub fn describe(&self) -> Option<String> {
        match (&self.message, &self.error) {
            (Some(serde_json::Value::String(message)), _) => Some(message.clone()),
            (Some(other), _) => Some(other.to_string()),
            (None, Some(error)) => Some(error.clone()),
            (None, None) => None,
        }
    }
}
