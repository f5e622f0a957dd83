//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while talking to the GitLab API
#[derive(Error, Debug)]
pub enum GitLabError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuildFailed(#[source] reqwest::Error),

    #[error("Request for {entity} failed: {source}")]
    RequestFailed {
        entity: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response for {entity}: {message}")]
    InvalidResponse { entity: String, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Access denied while fetching {0} (check the access token)")]
    Unauthorized(String),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),
}

/// Errors that can occur while interpreting an attendance table row
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Missing contributor name in row: {0}")]
    MissingContributor(String),

    #[error("Missing start or end time in row: {0}")]
    MissingTimes(String),

    #[error("End time {end} is before start time {start}")]
    NegativeSpan { start: String, end: String },
}

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    Invalid(#[from] toml::de::Error),

    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
