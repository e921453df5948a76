//! `[theme.footer]` configuration.

use macros::Config;
use serde::{Deserialize, Serialize};

/// Site footer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.footer")]
pub struct FooterConfig {
    /// Footer color style: "light" or "dark".
    #[config(default = "light", inline_doc)]
    pub style: FooterStyle,

    /// Copyright line shown at the bottom.
    #[config(default = "Copyright © My Docs Site")]
    pub copyright: Option<String>,
}

/// Footer color style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_footer_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.theme.footer.style, FooterStyle::Light);
        assert!(config.theme.footer.copyright.is_none());
    }

    #[test]
    fn test_footer_dark() {
        let config =
            test_parse_config("[theme.footer]\nstyle = \"dark\"\ncopyright = \"© 2026 Dson\"");
        assert_eq!(config.theme.footer.style, FooterStyle::Dark);
        assert_eq!(config.theme.footer.copyright.as_deref(), Some("© 2026 Dson"));
    }
}
