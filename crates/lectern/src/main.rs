//! Lectern CLI - site configuration tooling.
//!
//! Provides commands for:
//! - `init`: Write a starter `lectern.toml`
//! - `check`: Load and validate the configuration
//! - `export`: Emit the site generator JSON
//! - `sidebar`: Show the sidebar groups for a route

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ExportArgs, InitArgs, SidebarArgs};
use output::Output;

/// Lectern - site configuration tooling.
#[derive(Parser)]
#[command(name = "lectern", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter configuration file.
    Init(InitArgs),
    /// Load and validate the configuration.
    Check(CheckArgs),
    /// Emit the site generator JSON.
    Export(ExportArgs),
    /// Show the sidebar groups for a route.
    Sidebar(SidebarArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set for the check command
    let verbose = matches!(&cli.command, Commands::Check(args) if args.verbose);

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .init();

    let result = match cli.command {
        Commands::Init(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Export(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// Tracing filter for the process.
///
/// `--verbose` enables DEBUG level so the configuration discovery walk is
/// shown, otherwise `RUST_LOG` controls logging.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    }
}
