//! `lectern sidebar` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use lectern_config::SiteConfig;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Route to resolve (e.g., /exercises/).
    route: String,

    /// Path to configuration file (default: auto-discover lectern.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit the groups as JSON instead of text.
    #[arg(long)]
    json: bool,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or no section matches the route.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = SiteConfig::load(self.config.as_deref())?;

        let Some(groups) = config.theme.sidebar.for_route(&self.route) else {
            return Err(CliError::Validation(format!(
                "no sidebar section matches route '{}'",
                self.route
            )));
        };

        if self.json {
            let json = serde_json::to_string_pretty(groups)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
            return Ok(());
        }

        for group in groups {
            output.highlight(&group.text);
            for item in &group.items {
                output.info(&format!("  {}", item.text));
                output.detail(&format!("    {}", item.link));
            }
        }

        Ok(())
    }
}
