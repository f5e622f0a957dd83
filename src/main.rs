//! Sprint Time Tracker CLI
//!
//! Prints a per-sprint and overall Markdown breakdown of time spent
//! per person on a GitLab project.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;
use std::process;

use sprint_time_tracker::commands::{
    display_config, display_version, execute_report, ConfigArgs, ReportArgs,
};
use sprint_time_tracker::utils::config::{TrackerConfig, DEFAULT_CONFIG_FILE, EXIT_CONFIG_MISSING};
use sprint_time_tracker::utils::error::ConfigError;

/// Sprint Time Tracker - time spent per person, per sprint
#[derive(Parser, Debug)]
#[command(name = "sprint-time")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Configuration source and overrides shared by commands
#[derive(Args, Debug)]
struct ConfigOptions {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Personal access token (overrides the configuration file)
    #[arg(long, env = "GITLAB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Only milestones whose title contains this text are sprints
    #[arg(long)]
    sprint_filter: Option<String>,

    /// Wiki page slug holding the lab session attendance tables
    #[arg(long)]
    wiki_slug: Option<String>,

    /// Ignore lab session attendance even if configured
    #[arg(long)]
    no_attendance: bool,
}

impl From<ConfigOptions> for ConfigArgs {
    fn from(options: ConfigOptions) -> Self {
        ConfigArgs {
            config_path: options.config,
            token: options.token,
            sprint_filter: options.sprint_filter,
            wiki_slug: options.wiki_slug,
            no_attendance: options.no_attendance,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the per-sprint and overall time breakdown
    Report {
        #[command(flatten)]
        config: ConfigOptions,

        /// Also write the Markdown report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate the configuration file and print it
    CheckConfig {
        #[command(flatten)]
        config: ConfigOptions,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report { config, output } => {
            let config = load_or_exit(config.into())?;
            execute_report(&config, &ReportArgs { output })?;
        }

        Commands::CheckConfig { config } => {
            let config = load_or_exit(config.into())?;
            display_config(&config);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Resolve configuration; a missing file ends the process with its own status
///
/// **Private** - internal command helper
fn load_or_exit(args: ConfigArgs) -> Result<TrackerConfig> {
    match args.resolve() {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound(path)) => {
            eprintln!("{} not found!", path.display());
            process::exit(EXIT_CONFIG_MISSING);
        }
        Err(e) => Err(e.into()),
    }
}
