//! Field information structures and parsing.

use syn::Type;

use crate::config::attr::{
    extract_doc_comment, get_custom_name, get_example, get_inline_doc, has_attr,
};

/// Parsed field information.
pub struct FieldInfo {
    pub name: syn::Ident,
    pub toml_name: String,
    pub doc: Option<String>,
    pub inline_doc: Option<String>,
    pub example: Option<String>,
    pub required: bool,
    pub hidden: bool,
    pub skip: bool,
    pub sub: bool,
    pub table: bool,
    pub ty: Type,
}

impl FieldInfo {
    /// Parse field info from a syn::Field.
    pub fn from_field(field: &syn::Field) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;

        Some(Self {
            name: ident.clone(),
            toml_name: get_custom_name(attrs).unwrap_or_else(|| ident.to_string()),
            doc: extract_doc_comment(attrs),
            inline_doc: get_inline_doc(attrs),
            example: get_example(attrs),
            required: has_attr(attrs, "required"),
            hidden: has_attr(attrs, "hidden"),
            skip: has_attr(attrs, "skip"),
            sub: has_attr(attrs, "sub"),
            table: has_attr(attrs, "table"),
            ty: field.ty.clone(),
        })
    }

    /// Full dotted key for this field under `section`.
    pub fn full_path(&self, section: &str) -> String {
        if section.is_empty() {
            self.toml_name.clone()
        } else {
            format!("{}.{}", section, self.toml_name)
        }
    }
}
