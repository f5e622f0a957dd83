use crate::utils::config::{mask_token, TrackerConfig};

/// Print a validated configuration with the token masked
pub fn display_config(config: &TrackerConfig) {
    println!("✓ Valid configuration");
    println!("  Server:        {}", config.authentication.server);
    println!("  Token:         {}", mask_token(&config.authentication.token));
    println!("  Project:       {}", config.project.id);
    if config.project.sprint_filter.is_empty() {
        println!("  Sprint filter: (all milestones)");
    } else {
        println!("  Sprint filter: {}", config.project.sprint_filter);
    }
    match &config.project.lab_time_wiki_slug {
        Some(slug) => println!("  Lab wiki page: {}", slug),
        None => println!("  Lab wiki page: (none)"),
    }
}

/// Display version information
pub fn display_version() {
    println!("Sprint Time Tracker v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Per-sprint time tracking breakdowns from GitLab issue notes");
    println!("and lab session attendance tables.");
}
