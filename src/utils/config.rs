//! Configuration and constants for the CLI.

use super::error::ConfigError;
use log::debug;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default timeout for GitLab API requests
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration file looked up when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Page size requested from paginated GitLab endpoints (API maximum)
pub const PAGE_SIZE: u32 = 100;

/// Process exit status when the configuration file is missing
pub const EXIT_CONFIG_MISSING: i32 = 2;

/// Header carrying the personal access token
pub const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// Header GitLab uses to announce the next page of a listing
pub const NEXT_PAGE_HEADER: &str = "x-next-page";

/// Complete tool configuration, loaded once at startup
#[derive(Debug, Clone, Deserialize)]
pub struct TrackerConfig {
    pub authentication: AuthenticationConfig,
    pub project: ProjectConfig,
}

#[derive(Clone, Deserialize)]
pub struct AuthenticationConfig {
    /// Base URL of the GitLab server, e.g. `https://gitlab.example.com`
    pub server: String,

    /// Personal access token
    #[serde(default)]
    pub token: String,
}

// Keeps the token out of debug logs
impl fmt::Debug for AuthenticationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticationConfig")
            .field("server", &self.server)
            .field("token", &mask_token(&self.token))
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Numeric project id or `group/project` path
    pub id: ProjectId,

    /// Substring a milestone title must contain to count as a sprint
    #[serde(default)]
    pub sprint_filter: String,

    /// Wiki page holding the lab session attendance tables
    #[serde(default)]
    pub lab_time_wiki_slug: Option<String>,
}

/// GitLab accepts either the numeric id or the full path of a project
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    Numeric(u64),
    Path(String),
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectId::Numeric(id) => write!(f, "{}", id),
            ProjectId::Path(path) => f.write_str(path),
        }
    }
}

impl TrackerConfig {
    /// Parse configuration from TOML text and validate it
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: TrackerConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that required values are present and well formed
    pub fn validate(&self) -> Result<(), ConfigError> {
        let server = self.authentication.server.trim();
        if server.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "authentication.server",
                reason: "cannot be empty".to_string(),
            });
        }
        if !server.starts_with("http://") && !server.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                field: "authentication.server",
                reason: "must start with http:// or https://".to_string(),
            });
        }
        if self.authentication.token.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "authentication.token",
                reason: "cannot be empty (set it in the file or via GITLAB_TOKEN)".to_string(),
            });
        }
        if let ProjectId::Path(path) = &self.project.id {
            if path.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "project.id",
                    reason: "cannot be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Load configuration from a TOML file
///
/// A missing file is reported as `ConfigError::NotFound` so the CLI can
/// exit with `EXIT_CONFIG_MISSING`.
///
/// # Example
/// ```ignore
/// let config = load_config("config.toml")?;
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<TrackerConfig, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    debug!("Loading configuration from {}", path.display());
    let contents = fs::read_to_string(path)?;
    let config: TrackerConfig = toml::from_str(&contents)?;
    Ok(config)
}

/// Mask all but the last four characters of a token
pub fn mask_token(token: &str) -> String {
    let count = token.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let visible: String = token.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), visible)
}
