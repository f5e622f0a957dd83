//! Report command implementation.
//!
//! The report command:
//! 1. Connects to the GitLab project
//! 2. Aggregates sprint notes and attendance tables
//! 3. Renders the Markdown breakdown to stdout (and optionally a file)

use super::models::ReportArgs;
use crate::aggregator::build_report;
use crate::gitlab::{GitLabClient, ProjectSource};
use crate::output::{render_report, write_report};
use crate::utils::config::TrackerConfig;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the report command against the configured GitLab server
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Client construction failures (bad server URL)
/// * Any failed API request, with the entity being fetched
/// * File write errors when `--output` is given
pub fn execute_report(config: &TrackerConfig, args: &ReportArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Step 1/3: Connecting to {}...", config.authentication.server);
    let client = GitLabClient::new(
        &config.authentication.server,
        config.authentication.token.clone(),
        &config.project.id,
    )
    .context("Failed to create GitLab client")?;

    info!("Step 2/3: Aggregating time tracking data...");
    let markdown = run_report(&client, config)?;

    info!("Step 3/3: Writing report...");
    println!("{}", markdown);

    if let Some(path) = &args.output {
        write_report(&markdown, path).context("Failed to write report file")?;
        info!("✓ Report written to: {}", path.display());
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Aggregate from any source and render the Markdown report
///
/// **Public** - usable with in-memory sources
pub fn run_report(source: &impl ProjectSource, config: &TrackerConfig) -> Result<String> {
    let report = build_report(source, config).with_context(|| {
        format!("Failed to aggregate time tracking for project {}", config.project.id)
    })?;

    debug!(
        "{} sprints, {} contributors overall",
        report.sprints.len(),
        report.overall.len()
    );

    Ok(render_report(&report))
}
