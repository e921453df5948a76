//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docsite.toml`:
//!
//! | Module   | TOML Section | Purpose                              |
//! |----------|--------------|--------------------------------------|
//! | `site`   | `[site]`     | Site metadata, urls, link policies   |
//! | `preset` | `[[preset]]` | Content plugin bundles (docs, blog)  |
//! | `theme`  | `[theme]`    | Color mode, navbar, footer, prism    |

pub mod preset;
pub mod site;
pub mod theme;

// Re-export section configs
pub use preset::{BlogOptions, BlogPreset, DocsPresetConfig, PresetConfig, ThemePresetConfig};
pub use site::{I18nConfig, LinkPolicy, SiteSectionConfig};
pub use theme::ThemeSectionConfig;
