//! `[site]` section configuration.
//!
//! Site metadata, deployment identifiers, broken-link policies, and
//! localization defaults.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Dsons' Notes"
//! tagline = "My collection of notes."
//! url = "https://notes.d-sons.com"
//! base_url = "/"
//! favicon = "static/img/favicon.ico"
//! organization = "demstar16"
//! project = "notes"
//! on_broken_links = "throw"
//! on_broken_markdown_links = "warn"
//!
//! [site.i18n]
//! default_locale = "en"
//! locales = ["en"]
//!
//! [site.extra]
//! github = "https://github.com/demstar16"
//! ```

use macros::Config;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::ConfigDiagnostics;
use crate::config::util::{extract_url_path, is_slash_delimited};

/// Site metadata and link-validation policy for the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Display name of the site.
    #[config(default = "My Docs Site")]
    pub title: String,

    /// Short descriptive subtitle.
    #[config(inline_doc)]
    pub tagline: String,

    /// Canonical deployment origin (e.g., "https://example.com").
    /// Must not include a path; path prefixes belong in `base_url`.
    pub url: Option<String>,

    /// Root path under which the site is served. Must start and end with "/".
    #[config(default = "/")]
    pub base_url: String,

    /// Icon asset reference (relative to site root).
    #[config(default = "static/img/favicon.ico")]
    pub favicon: Option<PathBuf>,

    /// Hosting-provider account for deployment.
    #[config(inline_doc)]
    pub organization: String,

    /// Hosting-provider repository for deployment.
    #[config(inline_doc)]
    pub project: String,

    /// Policy when a generated link target is absent: ignore | warn | throw.
    #[config(default = "throw")]
    pub on_broken_links: LinkPolicy,

    /// Policy for broken links inside markdown sources: ignore | warn | throw.
    #[config(default = "warn")]
    pub on_broken_markdown_links: LinkPolicy,

    /// Localization defaults.
    #[config(sub)]
    pub i18n: I18nConfig,

    /// Custom fields passed through to the generator untouched.
    #[serde(default)]
    #[config(skip)]
    pub extra: FxHashMap<String, toml::Value>,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            url: None,
            base_url: "/".into(),
            favicon: None,
            organization: String::new(),
            project: String::new(),
            on_broken_links: LinkPolicy::Throw,
            on_broken_markdown_links: LinkPolicy::Warn,
            i18n: I18nConfig::default(),
            extra: FxHashMap::default(),
        }
    }
}

impl SiteSectionConfig {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` must be non-empty
    /// - `base_url` must start and end with `/`
    /// - `url`, when set, must be a valid http/https URL without a path
    /// - `favicon` should use a common icon format
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "site title must not be empty",
                "set a display name, e.g.: title = \"My Docs Site\"",
            );
        }

        if !is_slash_delimited(&self.base_url) {
            diag.error_with_hint(
                Self::FIELDS.base_url,
                format!("'{}' must start and end with '/'", self.base_url),
                "use \"/\" for sites served at the root",
            );
        }

        if let Some(url_str) = &self.url {
            self.validate_url(url_str, diag);
        }

        // Favicons occasionally point at full-size images by accident
        if let Some(favicon) = &self.favicon {
            let known = favicon
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| matches!(e, "ico" | "png" | "svg"));
            if !known {
                diag.warn(
                    Self::FIELDS.favicon,
                    format!(
                        "'{}' does not look like an icon (expected .ico, .png, or .svg)",
                        favicon.display()
                    ),
                );
            }
        }

        self.i18n.validate(diag);
    }

    /// URL format check using the url crate for strict validation.
    fn validate_url(&self, url_str: &str, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(url_str) {
            Ok(parsed) => {
                // Must be http or https
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                // Must have a valid host
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
                // The path prefix lives in base_url, not in url
                if let Some(path) = extract_url_path(url_str)
                    && !path.is_empty()
                {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("must not include a path ('/{path}')"),
                        format!("move it to {}: base_url = \"/{path}/\"", Self::FIELDS.base_url),
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}

// ============================================================================
// Broken-link policy
// ============================================================================

/// Build-time behavior when a link target is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPolicy {
    /// Silently skip broken links.
    Ignore,
    /// Report broken links and continue.
    Warn,
    /// Fail the build on the first broken link.
    Throw,
}

// ============================================================================
// i18n
// ============================================================================

/// Localization defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.i18n")]
pub struct I18nConfig {
    /// Locale used for unprefixed routes.
    #[config(default = "en")]
    pub default_locale: String,

    /// Locales the site is built for.
    #[config(default = "[\"en\"]")]
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".into(),
            locales: vec!["en".into()],
        }
    }
}

impl I18nConfig {
    /// Validate localization settings.
    ///
    /// # Checks
    /// - `locales` must be non-empty and duplicate-free
    /// - `default_locale` must be a member of `locales`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.locales.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.locales,
                "at least one locale is required",
                "e.g.: locales = [\"en\"]",
            );
            return;
        }

        let mut seen = FxHashSet::default();
        for locale in &self.locales {
            if !seen.insert(locale.as_str()) {
                diag.error(
                    Self::FIELDS.locales,
                    format!("locale '{locale}' is listed more than once"),
                );
            }
        }

        if !self.locales.contains(&self.default_locale) {
            diag.error_with_hint(
                Self::FIELDS.default_locale,
                format!(
                    "'{}' is not a member of {}",
                    self.default_locale,
                    Self::FIELDS.locales
                ),
                format!("add \"{}\" to the locale list", self.default_locale),
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(config: &crate::config::SiteConfig) -> ConfigDiagnostics {
        config.collect_diagnostics()
    }

    #[test]
    fn test_site_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.base_url, "/");
        assert_eq!(config.site.on_broken_links, LinkPolicy::Throw);
        assert_eq!(config.site.on_broken_markdown_links, LinkPolicy::Warn);
        assert_eq!(config.site.i18n.default_locale, "en");
        assert_eq!(config.site.i18n.locales, vec!["en".to_string()]);
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut config = test_parse_config("");
        config.site.title = String::new();

        let diag = validate(&config);
        assert!(diag.has_errors());
        assert_eq!(diag.errors()[0].field.as_str(), "site.title");
    }

    #[test]
    fn test_base_url_must_be_slash_delimited() {
        let config = test_parse_config("base_url = \"docs\"");
        let diag = validate(&config);
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "site.base_url")
        );

        let config = test_parse_config("base_url = \"/\"");
        let diag = validate(&config);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_url_scheme_and_path_checks() {
        let config = test_parse_config("url = \"ftp://example.com\"");
        let diag = validate(&config);
        assert!(diag.errors().iter().any(|e| e.field.as_str() == "site.url"));

        // Path prefixes belong in base_url
        let config = test_parse_config("url = \"https://example.com/notes\"");
        let diag = validate(&config);
        assert!(diag.errors().iter().any(|e| e.field.as_str() == "site.url"));

        let config = test_parse_config("url = \"https://example.com\"");
        let diag = validate(&config);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_default_locale_must_be_listed() {
        let config = test_parse_config("[site.i18n]\ndefault_locale = \"fr\"\nlocales = [\"en\"]");
        let diag = validate(&config);
        assert!(diag.has_errors());
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "site.i18n.default_locale")
        );
    }

    #[test]
    fn test_duplicate_locales_rejected() {
        let config =
            test_parse_config("[site.i18n]\ndefault_locale = \"en\"\nlocales = [\"en\", \"en\"]");
        let diag = validate(&config);
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "site.i18n.locales")
        );
    }

    #[test]
    fn test_empty_locales_rejected() {
        let config = test_parse_config("[site.i18n]\nlocales = []");
        let diag = validate(&config);
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "site.i18n.locales")
        );
    }

    #[test]
    fn test_broken_link_policy_parses() {
        let config =
            test_parse_config("on_broken_links = \"ignore\"\non_broken_markdown_links = \"throw\"");
        assert_eq!(config.site.on_broken_links, LinkPolicy::Ignore);
        assert_eq!(config.site.on_broken_markdown_links, LinkPolicy::Throw);
    }

    #[test]
    fn test_unknown_link_policy_rejected() {
        let result = crate::config::SiteConfig::from_str(
            "[site]\ntitle = \"Test\"\non_broken_links = \"explode\"",
        );
        // The full chain must name the offending field, not just the literal
        let err = format!("{:#}", result.unwrap_err());
        assert!(err.contains("explode"));
        assert!(err.contains("on_broken_links"));
    }

    #[test]
    fn test_favicon_extension_warning() {
        let config = test_parse_config("favicon = \"static/img/favicon.jpeg\"");
        let diag = validate(&config);
        assert!(!diag.has_errors());
        assert_eq!(diag.warning_count(), 1);
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let config = test_parse_config("[site.extra]\ngithub = \"https://github.com/demstar16\"");
        assert_eq!(
            config.site.extra.get("github").and_then(|v| v.as_str()),
            Some("https://github.com/demstar16")
        );
    }
}
