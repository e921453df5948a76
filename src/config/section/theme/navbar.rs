//! `[theme.navbar]` configuration.
//!
//! # Example
//!
//! ```toml
//! [theme.navbar]
//! title = "Dsons' Notes"
//!
//! [theme.navbar.logo]
//! src = "static/img/logo.png"
//! alt = "Site logo"
//! href = "/"
//!
//! [[theme.navbar.items]]
//! kind = "doc_sidebar"
//! sidebar_id = "docs"
//! label = "Notes"
//! position = "left"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Items are an array of tables, outside the derive's field-path scheme.
const ITEMS_FIELD: FieldPath = FieldPath::new("theme.navbar.items");
const LOGO_FIELD: FieldPath = FieldPath::new("theme.navbar.logo");

/// Top navigation bar.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.navbar")]
pub struct NavbarConfig {
    /// Text shown next to the logo.
    #[config(inline_doc)]
    pub title: String,

    /// Logo image and link.
    #[config(skip)]
    pub logo: Option<LogoConfig>,

    /// Navigation entries, rendered in listed order.
    #[config(skip)]
    pub items: Vec<NavbarItem>,
}

impl NavbarConfig {
    /// Validate navbar entries.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(logo) = &self.logo {
            if logo.src.as_os_str().is_empty() {
                diag.error(LOGO_FIELD, "logo src must not be empty");
            }
            if logo.alt.is_empty() {
                diag.warn(LOGO_FIELD, "logo has no alt text".to_string());
            }
        }

        for item in &self.items {
            item.validate(diag);
        }
    }
}

// ============================================================================
// Logo
// ============================================================================

/// Navbar logo.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Image path (relative to site root).
    pub src: PathBuf,
    /// Alternative text for screen readers.
    pub alt: String,
    /// Link target when the logo is clicked.
    pub href: Option<String>,
    /// Browsing context: `_self` or `_blank`.
    pub target: Option<LinkTarget>,
}

/// Browsing context for links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    #[serde(rename = "_self")]
    SameTab,
    #[serde(rename = "_blank")]
    NewTab,
}

// ============================================================================
// Items
// ============================================================================

/// A single navbar entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavbarItem {
    /// Entry that opens a docs sidebar.
    DocSidebar {
        sidebar_id: String,
        #[serde(default)]
        label: String,
        #[serde(default)]
        position: NavbarPosition,
    },
    /// Plain link entry.
    Link {
        href: String,
        #[serde(default)]
        label: String,
        #[serde(default)]
        position: NavbarPosition,
    },
}

impl NavbarItem {
    /// Validate a single entry.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match self {
            Self::DocSidebar { sidebar_id, .. } => {
                if sidebar_id.is_empty() {
                    diag.error_with_hint(
                        ITEMS_FIELD,
                        "doc_sidebar item requires a non-empty sidebar_id",
                        "reference a sidebar declared in the docs sidebar file",
                    );
                }
            }
            Self::Link { href, .. } => {
                if href.is_empty() {
                    diag.error(ITEMS_FIELD, "link item requires a non-empty href");
                }
            }
        }
    }
}

/// Horizontal placement of a navbar item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    #[default]
    Left,
    Right,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_navbar_defaults() {
        let config = test_parse_config("");
        assert!(config.theme.navbar.title.is_empty());
        assert!(config.theme.navbar.logo.is_none());
        assert!(config.theme.navbar.items.is_empty());
    }

    #[test]
    fn test_doc_sidebar_item() {
        let config = test_parse_config(
            "[[theme.navbar.items]]\nkind = \"doc_sidebar\"\nsidebar_id = \"docs\"\nlabel = \"Notes\"",
        );
        assert_eq!(
            config.theme.navbar.items[0],
            NavbarItem::DocSidebar {
                sidebar_id: "docs".into(),
                label: "Notes".into(),
                position: NavbarPosition::Left,
            }
        );

        let diag = config.collect_diagnostics();
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_doc_sidebar_requires_sidebar_id() {
        let config =
            test_parse_config("[[theme.navbar.items]]\nkind = \"doc_sidebar\"\nsidebar_id = \"\"");
        let diag = config.collect_diagnostics();
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "theme.navbar.items")
        );
    }

    #[test]
    fn test_link_item_requires_href() {
        let config = test_parse_config(
            "[[theme.navbar.items]]\nkind = \"link\"\nhref = \"\"\nlabel = \"Blog\"",
        );
        let diag = config.collect_diagnostics();
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "theme.navbar.items")
        );
    }

    #[test]
    fn test_logo_target_parses() {
        let config = test_parse_config(
            "[theme.navbar.logo]\nsrc = \"static/img/logo.png\"\nalt = \"logo\"\ntarget = \"_self\"",
        );
        let logo = config.theme.navbar.logo.as_ref().unwrap();
        assert_eq!(logo.target, Some(LinkTarget::SameTab));
    }

    #[test]
    fn test_logo_without_alt_warns() {
        let config = test_parse_config("[theme.navbar.logo]\nsrc = \"static/img/logo.png\"");
        let diag = config.collect_diagnostics();
        assert!(!diag.has_errors());
        assert_eq!(diag.warning_count(), 1);
    }

    #[test]
    fn test_item_position_right() {
        let config = test_parse_config(
            "[[theme.navbar.items]]\nkind = \"link\"\nhref = \"/blog/\"\nposition = \"right\"",
        );
        let NavbarItem::Link { position, .. } = &config.theme.navbar.items[0] else {
            panic!("expected link item");
        };
        assert_eq!(*position, NavbarPosition::Right);
    }
}
