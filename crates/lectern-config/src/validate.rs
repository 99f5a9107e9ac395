//! Structural validation of a composed site configuration.
//!
//! Checks are collected into a [`ValidationReport`] so a single pass
//! surfaces every finding instead of stopping at the first.

use std::collections::HashSet;
use std::fmt;

use crate::error::ConfigError;
use crate::nav::NavItem;
use crate::sidebar::Sidebar;
use crate::site::{SiteConfig, SiteMetadata};
use crate::theme::SocialLink;

/// A single validation finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Config field path (e.g., "`themeConfig.nav[0].link`").
    pub field: String,
    /// Description of the problem.
    pub message: String,
}

/// All findings from one validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Record a finding.
    fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Findings in the order they were recorded.
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Number of findings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// True if validation passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for issue in &self.issues {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", issue.field, issue.message)?;
            first = false;
        }
        Ok(())
    }
}

impl SiteConfig {
    /// Validate the configuration structure.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` with the full report if any check
    /// fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let report = self.check();
        if report.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(report))
        }
    }

    /// Run every check and return the collected findings.
    #[must_use]
    pub fn check(&self) -> ValidationReport {
        let mut report = ValidationReport::default();
        check_metadata(&self.meta, &mut report);
        check_nav(&self.theme.nav, &mut report);
        check_sidebar(&self.theme.sidebar, &mut report);
        check_social_links(&self.theme.social_links, &mut report);
        report
    }
}

/// Check site metadata: title presence and base path shape.
fn check_metadata(meta: &SiteMetadata, report: &mut ValidationReport) {
    require_non_empty(&meta.title, "title", report);
    if let Some(base) = &meta.base {
        if !base.starts_with('/') {
            report.push("base", "must start with /");
        }
        if !base.ends_with('/') {
            report.push("base", "must end with /");
        }
    }
}

/// Check top navigation entries: labels, link shape, duplicates.
fn check_nav(nav: &[NavItem], report: &mut ValidationReport) {
    let mut seen = HashSet::new();
    for (i, item) in nav.iter().enumerate() {
        let field = format!("themeConfig.nav[{i}]");
        require_non_empty(&item.text, &format!("{field}.text"), report);
        require_route_link(&item.link, &format!("{field}.link"), report);
        if !seen.insert(item.link.as_str()) {
            report.push(
                format!("{field}.link"),
                format!("duplicate link '{}'", item.link),
            );
        }
    }
}

/// Check sidebar sections: key shape, group content, item links.
fn check_sidebar(sidebar: &Sidebar, report: &mut ValidationReport) {
    for (prefix, groups) in sidebar.sections() {
        let field = format!("themeConfig.sidebar.\"{prefix}\"");
        if !prefix.starts_with('/') {
            report.push(&field, "section key must start with /");
        }
        if groups.is_empty() {
            report.push(&field, "section has no groups");
        }
        for (gi, group) in groups.iter().enumerate() {
            let group_field = format!("{field}[{gi}]");
            require_non_empty(&group.text, &format!("{group_field}.text"), report);
            if group.items.is_empty() {
                report.push(&group_field, format!("group '{}' has no items", group.text));
            }
            let mut seen = HashSet::new();
            for (ii, item) in group.items.iter().enumerate() {
                let item_field = format!("{group_field}.items[{ii}]");
                require_non_empty(&item.text, &format!("{item_field}.text"), report);
                require_route_link(&item.link, &format!("{item_field}.link"), report);
                // Only links that are at least well-formed get the section check
                if item.link.starts_with('/') && !item.link.starts_with(prefix) {
                    report.push(
                        format!("{item_field}.link"),
                        format!("link '{}' is outside section '{prefix}'", item.link),
                    );
                }
                if !seen.insert(item.link.as_str()) {
                    report.push(
                        format!("{item_field}.link"),
                        format!("duplicate link '{}'", item.link),
                    );
                }
            }
        }
    }
}

/// Check social links: absolute http(s) URLs.
fn check_social_links(links: &[SocialLink], report: &mut ValidationReport) {
    for (i, link) in links.iter().enumerate() {
        require_http_url(&link.link, &format!("themeConfig.socialLinks[{i}].link"), report);
    }
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str, report: &mut ValidationReport) {
    if value.is_empty() {
        report.push(field, "cannot be empty");
    }
}

/// Require a link to be a site-absolute path starting with `/`.
fn require_route_link(value: &str, field: &str, report: &mut ValidationReport) {
    if value.is_empty() {
        report.push(field, "cannot be empty");
    } else if !value.starts_with('/') {
        report.push(field, "must start with /");
    }
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str, report: &mut ValidationReport) {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        report.push(field, "must start with http:// or https://");
    }
}
