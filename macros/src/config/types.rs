//! Type helper functions for Config derive macro.

use quote::quote;
use syn::{GenericArgument, PathArguments, Type};

/// Convert syn::Type to string representation
pub fn type_to_string(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}

/// Strip `Option<..>` and `Vec<..>` wrappers, returning the element type.
///
/// `Option<Vec<RawMenuItem>>` -> `RawMenuItem`
pub fn innermost_type(ty: &Type) -> &Type {
    if let Type::Path(type_path) = ty
        && let Some(segment) = type_path.path.segments.last()
        && matches!(segment.ident.to_string().as_str(), "Option" | "Vec")
        && let PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(GenericArgument::Type(inner)) = args.args.first()
    {
        return innermost_type(inner);
    }
    ty
}

/// Infer section name from struct name
pub fn infer_section(name: &str) -> String {
    let name = name.strip_prefix("Raw").unwrap_or(name);
    let name = name
        .strip_suffix("SectionConfig")
        .or_else(|| name.strip_suffix("Config"))
        .or_else(|| name.strip_suffix("Settings"))
        .unwrap_or(name);
    to_snake_case(name)
}

/// Convert PascalCase to snake_case
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Format an example value based on field type.
/// String-like types get quoted, numbers and booleans are used as-is.
pub fn format_example_for_type(value: &str, ty: &str) -> String {
    let inner = ty
        .strip_prefix("Option<")
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(ty);
    match inner {
        "bool" | "u8" | "u16" | "u32" | "u64" | "usize" | "i8" | "i16" | "i32" | "i64"
        | "isize" | "f32" | "f64" => value.to_string(),
        // Untagged numeric wrappers accept bare integers
        _ if inner.ends_with("Count") => value.to_string(),
        _ => format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\"")),
    }
}
