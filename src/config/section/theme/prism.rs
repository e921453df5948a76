//! `[theme.prism]` configuration for syntax highlighting.

use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Code block highlighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.prism")]
pub struct PrismConfig {
    /// Highlight theme used in light mode.
    #[config(default = "dracula", inline_doc)]
    pub theme: String,

    /// Highlight theme used in dark mode. Falls back to `theme` when unset.
    pub dark_theme: Option<String>,

    /// Languages to load on top of the built-in set.
    #[config(default = "[]")]
    pub additional_languages: Vec<String>,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            theme: "dracula".to_string(),
            dark_theme: None,
            additional_languages: Vec::new(),
        }
    }
}

impl PrismConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.theme.is_empty() {
            diag.error(Self::FIELDS.theme, "highlight theme must not be empty");
        }

        let mut seen = FxHashSet::default();
        for lang in &self.additional_languages {
            if !seen.insert(lang.as_str()) {
                diag.warn(
                    Self::FIELDS.additional_languages,
                    format!("language '{lang}' is listed more than once"),
                );
            }
        }
    }
}
