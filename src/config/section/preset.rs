//! `[[preset]]` configuration.
//!
//! A preset is a named bundle of plugin options consumed by the generator.
//! Presets form an ordered sequence; plugin wiring happens in listed order.
//!
//! # Example
//!
//! ```toml
//! [[preset]]
//! name = "classic"
//! blog = false
//!
//! [preset.docs]
//! sidebar = "sidebars.toml"
//! route_base_path = "/"
//!
//! [preset.theme]
//! custom_css = ["src/css/custom.css"]
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::ConfigDiagnostics;
use crate::config::util::is_slash_delimited;

/// A named bundle of plugin options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "preset")]
pub struct PresetConfig {
    /// Preset name (e.g., "classic").
    pub name: String,

    /// Blog module: `false` to disable, or a table of options.
    #[config(skip)]
    pub blog: BlogPreset,

    /// Documentation plugin options.
    #[config(sub)]
    pub docs: DocsPresetConfig,

    /// Theme plugin options.
    #[config(sub)]
    pub theme: ThemePresetConfig,
}

impl Default for PresetConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            blog: BlogPreset::default(),
            docs: DocsPresetConfig::default(),
            theme: ThemePresetConfig::default(),
        }
    }
}

impl PresetConfig {
    /// Validate a preset descriptor.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.name,
                "preset name must not be empty",
                "e.g.: name = \"classic\"",
            );
        }

        self.docs.validate(diag);
    }
}

// ============================================================================
// Blog toggle
// ============================================================================

/// Blog module toggle: a bare boolean or a full options table.
///
/// `blog = false` disables the module; a table enables it with options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlogPreset {
    /// Enable or disable the blog module with defaults.
    Enabled(bool),
    /// Enable the blog module with explicit options.
    Options(BlogOptions),
}

impl Default for BlogPreset {
    fn default() -> Self {
        Self::Enabled(true)
    }
}

impl BlogPreset {
    /// Whether the blog module is active.
    pub const fn is_enabled(&self) -> bool {
        match self {
            Self::Enabled(enabled) => *enabled,
            Self::Options(_) => true,
        }
    }
}

/// Blog module options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogOptions {
    /// Root path for blog routes.
    pub route_base_path: String,
    /// Posts shown per listing page.
    pub posts_per_page: usize,
}

impl Default for BlogOptions {
    fn default() -> Self {
        Self {
            route_base_path: "/blog/".into(),
            posts_per_page: 10,
        }
    }
}

// ============================================================================
// Docs plugin
// ============================================================================

/// Documentation plugin options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "preset.docs")]
pub struct DocsPresetConfig {
    /// Sidebar definition file (relative to site root).
    #[config(default = "sidebars.toml")]
    pub sidebar: PathBuf,

    /// Root path for documentation routes. Must start and end with "/".
    #[config(default = "/docs/")]
    pub route_base_path: String,

    /// Base URL for "edit this page" links; omit to hide them.
    pub edit_url: Option<String>,
}

impl Default for DocsPresetConfig {
    fn default() -> Self {
        Self {
            sidebar: "sidebars.toml".into(),
            route_base_path: "/docs/".into(),
            edit_url: None,
        }
    }
}

impl DocsPresetConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.sidebar.as_os_str().is_empty() {
            diag.error(Self::FIELDS.sidebar, "sidebar path must not be empty");
        }

        if !is_slash_delimited(&self.route_base_path) {
            diag.error_with_hint(
                Self::FIELDS.route_base_path,
                format!("'{}' must start and end with '/'", self.route_base_path),
                "use \"/\" to serve docs at the site root",
            );
        }
    }
}

// ============================================================================
// Theme plugin
// ============================================================================

/// Theme plugin options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "preset.theme")]
pub struct ThemePresetConfig {
    /// Extra stylesheets applied on top of the theme.
    #[config(default = "[\"src/css/custom.css\"]")]
    pub custom_css: Vec<PathBuf>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_preset_defaults() {
        let config = test_parse_config("[[preset]]\nname = \"classic\"");
        assert_eq!(config.preset.len(), 1);

        let preset = &config.preset[0];
        assert_eq!(preset.name, "classic");
        assert!(preset.blog.is_enabled());
        assert_eq!(preset.docs.sidebar, PathBuf::from("sidebars.toml"));
        assert_eq!(preset.docs.route_base_path, "/docs/");
        assert!(preset.docs.edit_url.is_none());
    }

    #[test]
    fn test_blog_disabled_with_bool() {
        let config = test_parse_config("[[preset]]\nname = \"classic\"\nblog = false");
        assert!(!config.preset[0].blog.is_enabled());
        assert_eq!(config.preset[0].blog, BlogPreset::Enabled(false));
    }

    #[test]
    fn test_blog_options_table() {
        let config = test_parse_config(
            "[[preset]]\nname = \"classic\"\n[preset.blog]\nroute_base_path = \"/posts/\"\nposts_per_page = 5",
        );
        let blog = &config.preset[0].blog;
        assert!(blog.is_enabled());
        assert_eq!(
            *blog,
            BlogPreset::Options(BlogOptions {
                route_base_path: "/posts/".into(),
                posts_per_page: 5,
            })
        );
    }

    #[test]
    fn test_empty_preset_name_rejected() {
        let config = test_parse_config("[[preset]]\nblog = false");
        let diag = config.collect_diagnostics();
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "preset.name")
        );
    }

    #[test]
    fn test_docs_route_base_path_checked() {
        let config = test_parse_config(
            "[[preset]]\nname = \"classic\"\n[preset.docs]\nroute_base_path = \"docs\"",
        );
        let diag = config.collect_diagnostics();
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "preset.docs.route_base_path")
        );
    }

    #[test]
    fn test_preset_order_preserved() {
        let config = test_parse_config(
            "[[preset]]\nname = \"classic\"\n\n[[preset]]\nname = \"api-reference\"",
        );
        let names: Vec<_> = config.preset.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["classic", "api-reference"]);
    }
}
