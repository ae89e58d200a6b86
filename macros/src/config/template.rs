//! Template generation code for Config derive macro.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::field::FieldInfo;
use crate::config::types::{format_example_for_type, innermost_type, type_to_string};

/// Generate template code (TokenStream) for fields
pub fn generate_template_code(fields: &[&FieldInfo], section: &str) -> TokenStream {
    let field_codes: Vec<TokenStream> = fields
        .iter()
        .map(|f| generate_field_template_code(f, section))
        .collect();

    quote! {
        #(#field_codes)*
    }
}

/// Generate TOML template code for a single field
fn generate_field_template_code(info: &FieldInfo, section: &str) -> TokenStream {
    // Nested sections carry their own doc and header
    if info.sub {
        let inner = innermost_type(&info.ty);
        return quote! {
            out.push('\n');
            out.push_str(&<#inner>::template_with_header());
        };
    }

    let mut text = String::new();

    // Doc comment (skipped when a trailing comment replaces it)
    if info.inline_doc.is_none()
        && let Some(ref doc) = info.doc
    {
        for line in doc.lines() {
            text.push_str(&format!("# {}\n", line.trim()));
        }
    }

    if info.table {
        text.push_str(&format!("# [{}]\n", info.full_path(section)));
        if let Some(ref example) = info.example {
            for line in example.lines() {
                text.push_str(&format!("# {}\n", line.trim()));
            }
        }
        return quote! { out.push_str(#text); };
    }

    let value = match &info.example {
        Some(example) => format_example_for_type(example, &type_to_string(&info.ty)),
        None => "\"\"".to_string(),
    };

    // Only required keys are written live; optional keys stay commented out
    let prefix = if info.required { "" } else { "# " };
    let line = match &info.inline_doc {
        Some(comment) => format!("{}{} = {}  # {}\n", prefix, info.toml_name, value, comment),
        None => format!("{}{} = {}\n", prefix, info.toml_name, value),
    };
    text.push_str(&line);

    quote! { out.push_str(#text); }
}
