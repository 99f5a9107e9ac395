//! `lectern export` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use lectern_config::SiteConfig;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Path to configuration file (default: auto-discover lectern.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the JSON to a file instead of stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading, serialization, or writing fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = SiteConfig::load(self.config.as_deref())?;

        let json = if self.pretty {
            config.to_json_pretty()?
        } else {
            config.to_json()?
        };

        match self.out {
            Some(path) => {
                std::fs::write(&path, format!("{json}\n"))?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(json.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }

        Ok(())
    }
}
