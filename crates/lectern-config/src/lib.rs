//! Site configuration for lecture course documentation sites.
//!
//! Models the declarative configuration consumed by the external site
//! generator: site identity, top navigation, per-route sidebars, social
//! links, footer text, and search settings. Parses `lectern.toml` files
//! with serde, validates the structure, and serializes to the generator's
//! JSON schema.
//!
//! The two shipped configuration revisions live in [`revisions`].
//!
//! ## Environment Variable Expansion
//!
//! Metadata string values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `title`
//! - `description`
//! - `base`

mod error;
mod expand;
mod nav;
pub mod revisions;
mod sidebar;
mod site;
mod theme;
mod validate;

pub use error::ConfigError;
pub use nav::NavItem;
pub use sidebar::{Sidebar, SidebarGroup};
pub use site::{CONFIG_FILENAME, SiteConfig, SiteMetadata};
pub use theme::{Footer, SearchConfig, SearchProvider, SocialIcon, SocialLink, ThemeConfig};
pub use validate::{ValidationIssue, ValidationReport};
