//! Sidebar structure keyed by route prefix.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::nav::NavItem;

/// A titled group of sidebar entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group heading.
    pub text: String,
    /// Whether the group starts collapsed.
    #[serde(default)]
    pub collapsed: bool,
    /// Entries in display order.
    pub items: Vec<NavItem>,
}

/// Sidebar configuration keyed by route prefix.
///
/// Each section maps a route prefix (e.g., `/exercises/`) to the groups
/// shown for documents under that prefix. Sections are kept in key order
/// so serialization is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sidebar(BTreeMap<String, Vec<SidebarGroup>>);

impl Sidebar {
    /// Create an empty sidebar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section, returning the sidebar for chaining.
    #[must_use]
    pub fn with_section(mut self, prefix: impl Into<String>, groups: Vec<SidebarGroup>) -> Self {
        self.0.insert(prefix.into(), groups);
        self
    }

    /// Add a section, replacing any existing one with the same prefix.
    pub fn insert(&mut self, prefix: impl Into<String>, groups: Vec<SidebarGroup>) {
        self.0.insert(prefix.into(), groups);
    }

    /// Groups for an exact section key.
    #[must_use]
    pub fn section(&self, prefix: &str) -> Option<&[SidebarGroup]> {
        self.0.get(prefix).map(Vec::as_slice)
    }

    /// Resolve the groups shown for a route.
    ///
    /// The longest section key that is a prefix of the route wins. A route
    /// given without its trailing slash still matches its own section key,
    /// so `/exercises` resolves to the `/exercises/` section.
    #[must_use]
    pub fn for_route(&self, route: &str) -> Option<&[SidebarGroup]> {
        self.0
            .iter()
            .filter(|(prefix, _)| route_matches(prefix, route))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, groups)| groups.as_slice())
    }

    /// Iterate sections in key order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &[SidebarGroup])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no sections are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// True if a section key applies to a route.
fn route_matches(prefix: &str, route: &str) -> bool {
    route.starts_with(prefix) || prefix.strip_suffix('/') == Some(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(text: &str, items: Vec<NavItem>) -> SidebarGroup {
        SidebarGroup {
            text: text.to_owned(),
            collapsed: false,
            items,
        }
    }

    fn sample() -> Sidebar {
        Sidebar::new()
            .with_section(
                "/guide/",
                vec![group("Guide", vec![NavItem::new("Intro", "/guide/")])],
            )
            .with_section(
                "/guide/advanced/",
                vec![group(
                    "Advanced",
                    vec![NavItem::new("Tuning", "/guide/advanced/tuning")],
                )],
            )
    }

    #[test]
    fn test_for_route_exact_key() {
        let sidebar = sample();
        let groups = sidebar.for_route("/guide/").unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].text, "Guide");
    }

    #[test]
    fn test_for_route_nested_path() {
        let sidebar = sample();
        let groups = sidebar.for_route("/guide/setup").unwrap();
        assert_eq!(groups[0].text, "Guide");
    }

    #[test]
    fn test_for_route_longest_prefix_wins() {
        let sidebar = sample();
        let groups = sidebar.for_route("/guide/advanced/tuning").unwrap();
        assert_eq!(groups[0].text, "Advanced");
    }

    #[test]
    fn test_for_route_without_trailing_slash() {
        let sidebar = sample();
        let groups = sidebar.for_route("/guide").unwrap();
        assert_eq!(groups[0].text, "Guide");
    }

    #[test]
    fn test_for_route_no_match() {
        let sidebar = sample();
        assert!(sidebar.for_route("/reference/").is_none());
    }

    #[test]
    fn test_section_exact_lookup_only() {
        let sidebar = sample();
        assert!(sidebar.section("/guide/").is_some());
        assert!(sidebar.section("/guide/setup").is_none());
    }

    #[test]
    fn test_group_order_preserved() {
        let sidebar = Sidebar::new().with_section(
            "/guide/",
            vec![
                group("First", vec![NavItem::new("A", "/guide/a")]),
                group("Second", vec![NavItem::new("B", "/guide/b")]),
            ],
        );
        let groups = sidebar.for_route("/guide/").unwrap();
        assert_eq!(groups[0].text, "First");
        assert_eq!(groups[1].text, "Second");
    }

    #[test]
    fn test_serializes_as_map() {
        let sidebar = sample();
        let value = serde_json::to_value(&sidebar).unwrap();
        assert!(value.is_object());
        assert!(value.get("/guide/").is_some());
        assert!(value.get("/guide/advanced/").is_some());
    }

    #[test]
    fn test_collapsed_defaults_to_false() {
        let toml = r#"
text = "Guide"

[[items]]
text = "Intro"
link = "/guide/"
"#;
        let group: SidebarGroup = toml::from_str(toml).unwrap();
        assert!(!group.collapsed);
    }
}
