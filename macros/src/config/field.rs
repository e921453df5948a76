//! Field information structures and parsing.

use crate::config::attr::{extract_doc_comment, get_default_value, has_attr};
use crate::config::types::type_to_string;

/// Parsed field information.
pub struct FieldInfo {
    pub name: syn::Ident,
    pub toml_name: String,
    pub doc: Option<String>,
    /// Render a single-line doc as a trailing comment.
    pub inline_doc: bool,
    pub default: Option<String>,
    pub skip: bool,
    pub sub: bool,
    pub ty: String,
}

impl FieldInfo {
    /// Parse field info from a syn::Field.
    pub fn from_field(field: &syn::Field) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;

        Some(Self {
            name: ident.clone(),
            toml_name: ident.to_string(),
            doc: extract_doc_comment(attrs),
            inline_doc: has_attr(attrs, "inline_doc"),
            default: get_default_value(attrs),
            skip: has_attr(attrs, "skip"),
            sub: has_attr(attrs, "sub"),
            ty: type_to_string(&field.ty),
        })
    }
}
