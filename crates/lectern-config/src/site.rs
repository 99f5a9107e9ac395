//! Root configuration type and file loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::expand;
use crate::theme::ThemeConfig;

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "lectern.toml";

/// Site identity shown in the generated chrome.
///
/// Flattened into the configuration root; the generator expects `title`,
/// `description` and `base` as top-level keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMetadata {
    /// Site title.
    pub title: String,
    /// Site description for HTML metadata.
    pub description: String,
    /// URL path prefix the site is deployed under (e.g., `/teaching/concurrent/`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

/// Composed site configuration.
///
/// Matches the option names and nesting the external site generator expects,
/// so the serialized form can be handed to it directly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site identity (flattened to top-level keys).
    #[serde(flatten)]
    pub meta: SiteMetadata,
    /// Theme configuration block.
    #[serde(rename = "themeConfig", default)]
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `lectern.toml` in the current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` does not exist, if no
    /// file can be discovered, or if parsing, expansion, or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }
        let Some(discovered) = Self::discover() else {
            return Err(ConfigError::Discovery);
        };
        Self::load_from_file(&discovered)
    }

    /// Search for `lectern.toml` in the current directory and parents.
    #[must_use]
    pub fn discover() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "discovered configuration file");
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// Expands environment variables in the metadata strings and validates
    /// the result.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing, expansion, or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to the generator's JSON schema.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to the generator's JSON schema, pretty-printed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serialize to TOML in the authoring format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Expand environment variable references in the metadata strings.
    ///
    /// Navigation text and links stay literal; only `title`, `description`
    /// and `base` support expansion, so a CI pipeline can inject the deploy
    /// prefix.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.meta.title = expand::expand_env(&self.meta.title, "title")?;
        self.meta.description = expand::expand_env(&self.meta.description, "description")?;
        if let Some(ref base) = self.meta.base {
            self.meta.base = Some(expand::expand_env(base, "base")?);
        }
        Ok(())
    }
}
