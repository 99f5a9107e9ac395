//! Theme configuration block: navigation, sidebar, social links, footer, search.

use serde::{Deserialize, Serialize};

use crate::nav::NavItem;
use crate::sidebar::Sidebar;

/// Icon identifiers the site chrome can render.
///
/// Unknown identifiers are rejected at parse time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    Gitlab,
    Discord,
    Mastodon,
    Youtube,
    X,
}

/// An icon-labeled external link shown in the site chrome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon to render.
    pub icon: SocialIcon,
    /// Absolute URL of the profile or project.
    pub link: String,
}

/// Footer text lines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    /// Message line (may embed inline HTML).
    pub message: String,
    /// Copyright line (may embed inline HTML).
    pub copyright: String,
}

/// Search backend selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Client-side index built at generation time.
    #[default]
    Local,
    /// Hosted Algolia `DocSearch`.
    Algolia,
}

/// Search configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search backend.
    pub provider: SearchProvider,
}

/// Theme configuration block consumed by the site generator.
///
/// Field names and nesting follow the generator's expected schema; empty
/// collections and absent options are omitted from the serialized form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Top navigation entries in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nav: Vec<NavItem>,
    /// Sidebar sections keyed by route prefix.
    #[serde(skip_serializing_if = "Sidebar::is_empty")]
    pub sidebar: Sidebar,
    /// Social links shown in the site chrome.
    #[serde(rename = "socialLinks", skip_serializing_if = "Vec::is_empty")]
    pub social_links: Vec<SocialLink>,
    /// Footer text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
    /// Search configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConfig>,
}
