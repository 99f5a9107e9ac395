//! Top navigation entries.

use serde::{Deserialize, Serialize};

/// A navigation entry with a display label and a link target.
///
/// Used both for the top navigation bar and for sidebar group items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display label.
    pub text: String,
    /// Link target path (site-absolute, starting with `/`).
    pub link: String,
}

impl NavItem {
    /// Create a navigation entry.
    #[must_use]
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}
