//! `[theme.color_mode]` configuration.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Color scheme behavior.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.color_mode")]
pub struct ColorModeConfig {
    /// Mode used on first visit: light | dark.
    #[config(default = "light")]
    pub default_mode: ColorMode,

    /// Hide the light/dark toggle and pin the default mode.
    #[config(inline_doc)]
    pub disable_switch: bool,

    /// Follow the visitor's `prefers-color-scheme` media query.
    #[config(inline_doc)]
    pub respect_prefers_color_scheme: bool,
}

impl ColorModeConfig {
    /// Validate color mode settings.
    ///
    /// A pinned mode cannot also follow the OS preference.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.disable_switch && self.respect_prefers_color_scheme {
            diag.error_with_hint(
                Self::FIELDS.respect_prefers_color_scheme,
                format!(
                    "cannot be combined with {} = true",
                    Self::FIELDS.disable_switch
                ),
                "a pinned color mode ignores the OS preference; drop one of the two",
            );
        }
    }
}

/// Color scheme identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_color_mode_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.theme.color_mode.default_mode, ColorMode::Light);
        assert!(!config.theme.color_mode.disable_switch);
        assert!(!config.theme.color_mode.respect_prefers_color_scheme);
    }

    #[test]
    fn test_forced_dark_mode() {
        let config = test_parse_config(
            "[theme.color_mode]\ndefault_mode = \"dark\"\ndisable_switch = true",
        );
        assert_eq!(config.theme.color_mode.default_mode, ColorMode::Dark);
        assert!(config.theme.color_mode.disable_switch);

        let diag = config.collect_diagnostics();
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_pinned_mode_conflicts_with_os_preference() {
        let config = test_parse_config(
            "[theme.color_mode]\ndisable_switch = true\nrespect_prefers_color_scheme = true",
        );
        let diag = config.collect_diagnostics();
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "theme.color_mode.respect_prefers_color_scheme")
        );
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let result = crate::config::SiteConfig::from_str(
            "[site]\ntitle = \"Test\"\n[theme.color_mode]\ndefault_mode = \"sepia\"",
        );
        assert!(result.unwrap_err().to_string().contains("sepia"));
    }
}
