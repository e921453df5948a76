//! Proc macros for docsite.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a commented TOML template for a
//! configuration section.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site.i18n")]
//! /// Localization defaults.
//! pub struct I18nConfig {
//!     /// Locale used when no locale prefix is present.
//!     #[config(default = "en")]
//!     pub default_locale: String,
//!
//!     /// Internal field.
//!     #[config(skip)]
//!     pub resolved: bool,
//! }
//!
//! // Generates:
//! // - I18nConfig::FIELDS.default_locale -> FieldPath("site.i18n.default_locale")
//! // - I18nConfig::template() -> TOML string with comments
//! // - I18nConfig::template_with_header() -> with [section] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template (internal use)
//! - `#[config(sub)]` - Nested section, referenced by comment in template
//! - `#[config(default = "x")]` - Default value shown in template
//! - `#[config(inline_doc)]` - Render a single-line doc as a trailing comment
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `SiteSectionConfig` → `site`
//! - `PrismConfig` → `prism`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
