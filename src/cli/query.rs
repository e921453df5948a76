//! Query command implementation.
//!
//! Serializes the resolved configuration to JSON so other tools can consume
//! it without parsing TOML themselves.

use std::fs;
use std::io::Write;

use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

use crate::cli::QueryArgs;
use crate::config::SiteConfig;
use crate::log;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let value = serde_json::to_value(config)?;

    let output = if let Some(ref fields) = args.fields {
        filter_fields(&value, fields)
    } else {
        value
    };

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Filter to specific top-level sections.
///
/// A requested section that does not exist is shown as null so typos
/// are visible instead of silently dropped.
fn filter_fields(value: &JsonValue, fields: &[String]) -> JsonValue {
    let mut obj = Map::new();

    if let JsonValue::Object(full) = value {
        for field in fields {
            match full.get(field) {
                Some(v) => obj.insert(field.clone(), v.clone()),
                None => obj.insert(field.clone(), JsonValue::Null),
            };
        }
    }

    JsonValue::Object(obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_filter_fields_selects_sections() {
        let config = test_parse_config("[theme.color_mode]\ndefault_mode = \"dark\"");
        let value = serde_json::to_value(&config).unwrap();

        let filtered = filter_fields(&value, &["theme".to_string()]);
        let obj = filtered.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(
            obj["theme"]["color_mode"]["default_mode"],
            JsonValue::String("dark".to_string())
        );
    }

    #[test]
    fn test_filter_fields_unknown_is_null() {
        let config = test_parse_config("");
        let value = serde_json::to_value(&config).unwrap();

        let filtered = filter_fields(&value, &["plugins".to_string()]);
        assert_eq!(filtered["plugins"], JsonValue::Null);
    }

    #[test]
    fn test_full_config_serializes_to_object() {
        let config = test_parse_config("[[preset]]\nname = \"classic\"");
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["site"]["title"], "Test");
        assert_eq!(value["preset"][0]["name"], "classic");
        // Skipped internals must not leak into output
        assert!(value.get("config_path").is_none());
        assert!(value.get("root").is_none());
    }
}
