//! TOML template generation for config sections.
//!
//! Fields with an explicit `#[config(default = ...)]` are rendered at
//! macro expansion time. Fields without one are rendered at runtime from
//! the struct's `Default` value via `toml::Value`, so the emitted line is
//! always valid TOML for the field's actual type.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::field::FieldInfo;
use crate::config::types::format_default_for_type;

/// Generate template rendering code for fields.
pub fn generate_template_code(fields: &[&FieldInfo], section: &str) -> TokenStream {
    let field_codes: Vec<TokenStream> = fields
        .iter()
        .map(|f| field_template_code(f, section))
        .collect();

    quote! {
        #(#field_codes)*
    }
}

/// Generate TOML template rendering code for a single field.
fn field_template_code(info: &FieldInfo, section: &str) -> TokenStream {
    let field_name = &info.name;
    let toml_name = &info.toml_name;

    let full_path = if section.is_empty() {
        info.toml_name.clone()
    } else {
        format!("{}.{}", section, info.toml_name)
    };

    // Single-line docs can be rendered as a trailing comment
    let single_line_doc = info.doc.as_ref().is_some_and(|d| !d.contains('\n'));
    let use_inline = info.inline_doc && single_line_doc;

    // Doc comment code (only if not using inline style)
    let doc_code = if use_inline {
        quote! {}
    } else if let Some(doc) = &info.doc {
        let doc_lines: Vec<_> = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
        let doc_str = doc_lines.join("");
        quote! { out.push_str(#doc_str); }
    } else {
        quote! {}
    };

    // Nested sections are referenced, not expanded in place
    if info.sub {
        let line = format!("# see [{}]\n", full_path);
        return quote! {
            #doc_code
            out.push_str(#line);
        };
    }

    let is_optional = info.ty.starts_with("Option<");

    // Optional fields without explicit default are commented out
    if is_optional && info.default.is_none() {
        let line = if use_inline {
            format!(
                "# {} = \"\"  # {}\n",
                toml_name,
                info.doc.as_deref().unwrap_or("").trim()
            )
        } else {
            format!("# {} = \"\"\n", toml_name)
        };
        return quote! {
            #doc_code
            out.push_str(#line);
        };
    }

    // Explicit default: rendered at expansion time
    if let Some(default_val) = &info.default {
        let value = format_default_for_type(default_val, &info.ty);
        let line = if use_inline {
            format!(
                "{} = {}  # {}\n",
                toml_name,
                value,
                info.doc.as_deref().unwrap_or("").trim()
            )
        } else {
            format!("{} = {}\n", toml_name, value)
        };
        return quote! {
            #doc_code
            out.push_str(#line);
        };
    }

    // No attribute: render the runtime Default value
    let prefix = format!("{} = ", toml_name);
    let tail = if use_inline {
        format!("  # {}\n", info.doc.as_deref().unwrap_or("").trim())
    } else {
        "\n".to_string()
    };
    quote! {
        #doc_code
        out.push_str(#prefix);
        out.push_str(
            &toml::Value::try_from(default.#field_name.clone())
                .map(|v| v.to_string())
                .unwrap_or_default(),
        );
        out.push_str(#tail);
    }
}
