//! Configuration error types.

use std::path::PathBuf;

use crate::validate::ValidationReport;

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// No config file discovered in the current directory or any parent.
    #[error("No lectern.toml found here or in any parent. Run 'lectern init' to create one.")]
    Discovery,
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation failed with one or more findings.
    #[error("Configuration error: {0}")]
    Validation(ValidationReport),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`base`").
        field: String,
        /// Error message (e.g., "${`DEPLOY_BASE`} not set").
        message: String,
    },
}
