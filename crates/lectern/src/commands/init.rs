//! `lectern init` command implementation.

use std::path::PathBuf;

use clap::Args;
use lectern_config::{CONFIG_FILENAME, revisions};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the init command.
#[derive(Args)]
pub(crate) struct InitArgs {
    /// Directory to create the configuration in (default: current directory).
    dir: Option<PathBuf>,

    /// Write the minimal scaffold revision instead of the full one.
    #[arg(long)]
    minimal: bool,

    /// Overwrite an existing configuration file.
    #[arg(long)]
    force: bool,
}

impl InitArgs {
    /// Execute the init command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file already exists (without `--force`) or
    /// writing fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let dir = self.dir.unwrap_or_else(|| PathBuf::from("."));
        let path = dir.join(CONFIG_FILENAME);

        if path.exists() {
            if !self.force {
                return Err(CliError::Validation(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            output.warning(&format!("Overwriting {}", path.display()));
        }

        let config = if self.minimal {
            revisions::initial()
        } else {
            revisions::current()
        };
        let toml = config.to_toml()?;

        std::fs::create_dir_all(&dir)?;
        std::fs::write(&path, toml)?;

        output.success(&format!("Created {}", path.display()));
        output.info("Run 'lectern check' to validate it.");
        Ok(())
    }
}
