use crate::utils::config::{load_config, TrackerConfig, DEFAULT_CONFIG_FILE};
use crate::utils::error::ConfigError;
use std::path::PathBuf;

/// Where the configuration comes from, plus command-line overrides
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ConfigArgs {
    /// Path to the TOML configuration file
    pub config_path: PathBuf,

    /// Access token overriding the file value
    pub token: Option<String>,

    /// Sprint title filter overriding the file value
    pub sprint_filter: Option<String>,

    /// Attendance wiki slug overriding the file value
    pub wiki_slug: Option<String>,

    /// Ignore attendance data even if a wiki slug is configured
    pub no_attendance: bool,
}

impl Default for ConfigArgs {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            token: None,
            sprint_filter: None,
            wiki_slug: None,
            no_attendance: false,
        }
    }
}

impl ConfigArgs {
    /// Load the file, apply overrides, and validate the result
    pub fn resolve(&self) -> Result<TrackerConfig, ConfigError> {
        let mut config = load_config(&self.config_path)?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line values on top of a loaded configuration
    pub fn apply_overrides(&self, config: &mut TrackerConfig) {
        if let Some(token) = &self.token {
            config.authentication.token = token.clone();
        }
        if let Some(filter) = &self.sprint_filter {
            config.project.sprint_filter = filter.clone();
        }
        if let Some(slug) = &self.wiki_slug {
            config.project.lab_time_wiki_slug = Some(slug.clone());
        }
        if self.no_attendance {
            config.project.lab_time_wiki_slug = None;
        }
    }
}

/// Arguments for the report command
#[derive(Debug, Clone, Default)]
pub struct ReportArgs {
    /// Also write the Markdown report to this file
    pub output: Option<PathBuf>,
}
