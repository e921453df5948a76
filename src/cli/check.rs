//! Check command implementation.
//!
//! Runs every section validator and reports all findings in one pass,
//! so a config with several problems is fixed in one edit instead of
//! one failure at a time.

use anyhow::{Result, bail};

use crate::config::{ConfigError, SiteConfig};
use crate::log;
use crate::utils::plural::plural_count;

/// Execute check command
pub fn run_check(config: &SiteConfig, strict: bool) -> Result<()> {
    let diag = config.collect_diagnostics();

    let warning_count = diag.warning_count();
    diag.print_warnings();

    if diag.has_errors() {
        return diag
            .into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into());
    }

    if strict && warning_count > 0 {
        bail!(
            "{} treated as errors (--strict)",
            plural_count(warning_count, "warning")
        );
    }

    log!(
        "check";
        "{} ok: {}, {}",
        config.config_path.file_name().map_or_else(
            || config.config_path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        ),
        plural_count(config.site.i18n.locales.len(), "locale"),
        plural_count(config.preset.len(), "preset"),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_clean_config_passes() {
        let config = test_parse_config("");
        assert!(run_check(&config, false).is_ok());
    }

    #[test]
    fn test_errors_fail_check() {
        let config = test_parse_config("base_url = \"docs\"");
        assert!(run_check(&config, false).is_err());
    }

    #[test]
    fn test_strict_promotes_warnings() {
        // Odd favicon extension is a warning, not an error
        let config = test_parse_config("favicon = \"static/img/favicon.txt\"");
        assert!(run_check(&config, false).is_ok());
        assert!(run_check(&config, true).is_err());
    }
}
