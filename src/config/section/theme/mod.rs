//! `[theme]` section configuration.
//!
//! Presentation-layer settings consumed by the theme at build time.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! image = "static/img/social-card.jpg"
//!
//! [theme.color_mode]
//! default_mode = "dark"
//! disable_switch = true
//!
//! [theme.navbar]
//! title = "Dsons' Notes"
//!
//! [theme.footer]
//! style = "dark"
//! copyright = "© 2026 Dempsey Thompson"
//!
//! [theme.prism]
//! theme = "dracula"
//! additional_languages = ["scheme", "bash"]
//! ```

mod color_mode;
mod footer;
mod navbar;
mod prism;

pub use color_mode::{ColorMode, ColorModeConfig};
pub use footer::{FooterConfig, FooterStyle};
pub use navbar::{LinkTarget, LogoConfig, NavbarConfig, NavbarItem, NavbarPosition};
pub use prism::PrismConfig;

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::ConfigDiagnostics;

/// Theme section configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Config)]
#[serde(default)]
pub struct ThemeSectionConfig {
    /// Social card image shown in link previews.
    pub image: Option<PathBuf>,

    /// Color scheme behavior.
    #[config(sub)]
    pub color_mode: ColorModeConfig,

    /// Top navigation bar.
    #[config(sub)]
    pub navbar: NavbarConfig,

    /// Page footer.
    #[config(sub)]
    pub footer: FooterConfig,

    /// Syntax-highlighting theme.
    #[config(sub)]
    pub prism: PrismConfig,
}

impl ThemeSectionConfig {
    /// Validate all presentation settings.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.color_mode.validate(diag);
        self.navbar.validate(diag);
        self.prism.validate(diag);
    }
}
