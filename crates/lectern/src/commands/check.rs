//! `lectern check` command implementation.

use std::path::PathBuf;

use clap::Args;
use lectern_config::{ConfigError, SiteConfig};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover lectern.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output (show discovery logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or fails
    /// validation.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Resolve the path once so the reported file is the loaded file.
        let path = match self.config {
            Some(explicit) => explicit,
            None => {
                let Some(found) = SiteConfig::discover() else {
                    return Err(ConfigError::Discovery.into());
                };
                output.detail(&format!("Using {}", found.display()));
                found
            }
        };

        match SiteConfig::load(Some(&path)) {
            Ok(config) => {
                output.success("Configuration is valid");
                output.separator();
                output.info(&format!("Title: {}", config.meta.title));
                if let Some(base) = &config.meta.base {
                    output.info(&format!("Base: {base}"));
                }
                output.info(&format!("Nav entries: {}", config.theme.nav.len()));
                let groups: usize = config
                    .theme
                    .sidebar
                    .sections()
                    .map(|(_, groups)| groups.len())
                    .sum();
                output.info(&format!(
                    "Sidebar sections: {} ({groups} groups)",
                    config.theme.sidebar.len()
                ));
                output.info(&format!("Social links: {}", config.theme.social_links.len()));
                Ok(())
            }
            Err(ConfigError::Validation(report)) => {
                output.error(&format!("Found {} validation findings:", report.len()));
                for issue in report.issues() {
                    output.info(&format!("  {}: {}", issue.field, issue.message));
                }
                Err(CliError::Validation(format!(
                    "configuration has {} findings",
                    report.len()
                )))
            }
            Err(err) => Err(err.into()),
        }
    }
}
