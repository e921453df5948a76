//! Configuration file generation.
//!
//! Creates docsite.toml, ignore files and starter content for new sites.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::section::{
    preset::{DocsPresetConfig, ThemePresetConfig},
    site::{I18nConfig, SiteSectionConfig},
    theme::{ColorModeConfig, FooterConfig, NavbarConfig, PrismConfig},
};

/// Default config filename
const CONFIG_FILE: &str = "docsite.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Starter sidebar definition
const SIDEBARS_TOML: &str = "\
# Sidebar definitions. Each sidebar lists doc ids in display order.

[sidebars]
docs = [\"intro\"]
";

/// Starter stylesheet
const CUSTOM_CSS: &str = "\
/* Site-wide style overrides. Loaded after the theme's own styles. */

:root {
  --ifm-color-primary: #2e8555;
}
";

/// Starter document
const INTRO_MD: &str = "\
# Introduction

Welcome to your new documentation site.

Edit `docs/intro.md` to get started, or add more documents next to it.
";

/// Generate docsite.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# Docsite configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    // [site] section
    out.push_str(&SiteSectionConfig::template_with_header());
    out.push('\n');

    // [site.i18n] section
    out.push_str(&I18nConfig::template_with_header());
    out.push('\n');

    // [[preset]] is an array of tables, assembled by hand
    out.push_str("# Preset bundles, applied in listed order\n");
    out.push_str("[[preset]]\n");
    out.push_str("name = \"classic\"\n");
    out.push_str("# Set to a table to configure the blog, or false to disable it\n");
    out.push_str("blog = false\n\n");

    // [preset.docs] section
    out.push_str(&DocsPresetConfig::template_with_header());
    out.push('\n');

    // [preset.theme] section
    out.push_str(&ThemePresetConfig::template_with_header());
    out.push('\n');

    // [theme.color_mode] section
    out.push_str(&ColorModeConfig::template_with_header());
    out.push('\n');

    // [theme.navbar] section
    out.push_str(&NavbarConfig::template_with_header());
    out.push('\n');

    // [theme.footer] section
    out.push_str(&FooterConfig::template_with_header());
    out.push('\n');

    // [theme.prism] section
    out.push_str(&PrismConfig::template_with_header());

    out
}

/// Write default docsite.toml configuration
pub fn write_config(root: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
pub fn write_ignore_files(root: &Path) -> Result<()> {
    let content = "/build/\n.DS_Store";

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

/// Write starter content referenced by the generated config
pub fn write_starter_files(root: &Path) -> Result<()> {
    let files: &[(&str, &str)] = &[
        ("sidebars.toml", SIDEBARS_TOML),
        ("src/css/custom.css", CUSTOM_CSS),
        ("docs/intro.md", INTRO_MD),
    ];

    for (name, content) in files {
        let path = root.join(name);
        if !path.exists() {
            fs::write(&path, content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path()).unwrap();

        let config_path = temp.path().join("docsite.toml");
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[site]"));
        assert!(content.contains("[[preset]]"));
        assert!(content.contains("[theme.color_mode]"));
    }

    #[test]
    fn test_generated_config_validates_clean() {
        let content = generate_config_template();
        let config = SiteConfig::from_str(&content).unwrap();

        let diag = config.collect_diagnostics();
        assert!(!diag.has_errors(), "template has errors: {:?}", diag.errors());
        assert_eq!(diag.warning_count(), 0);
    }

    #[test]
    fn test_template_enum_fields_parse_to_defaults() {
        use crate::config::section::site::LinkPolicy;
        use crate::config::section::theme::{ColorMode, FooterStyle};

        // Every enum-typed field in the template must carry a valid
        // variant literal, not a placeholder the parser rejects
        let content = generate_config_template();
        let config = SiteConfig::from_str(&content).unwrap();

        assert_eq!(config.theme.footer.style, FooterStyle::Light);
        assert_eq!(config.theme.color_mode.default_mode, ColorMode::Light);
        assert_eq!(config.site.on_broken_links, LinkPolicy::Throw);
        assert_eq!(config.site.on_broken_markdown_links, LinkPolicy::Warn);
    }

    #[test]
    fn test_write_ignore_files() {
        let temp = TempDir::new().unwrap();
        write_ignore_files(temp.path()).unwrap();

        let gitignore = temp.path().join(".gitignore");
        assert!(gitignore.exists());

        let content = fs::read_to_string(&gitignore).unwrap();
        assert!(content.contains("/build/"));
    }

    #[test]
    fn test_ignore_files_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let gitignore = temp.path().join(".gitignore");
        fs::write(&gitignore, "custom content").unwrap();

        write_ignore_files(temp.path()).unwrap();

        let content = fs::read_to_string(&gitignore).unwrap();
        assert_eq!(content, "custom content");
    }

    #[test]
    fn test_starter_files_written() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src/css")).unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();

        write_starter_files(temp.path()).unwrap();

        assert!(temp.path().join("sidebars.toml").exists());
        assert!(temp.path().join("src/css/custom.css").exists());
        assert!(temp.path().join("docs/intro.md").exists());
    }
}
