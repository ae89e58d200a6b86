//! Proc macros for sitecfg.
//!
//! # Config derive macro
//!
//! Generates field path accessors, required-field checks and a TOML
//! starter template from a raw config struct.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "author")]
//! /// Author profile shown next to posts.
//! pub struct RawAuthor {
//!     /// Display name.
//!     #[config(required, example = "Jane Doe")]
//!     pub name: Option<String>,
//!
//!     /// Contact handles keyed by channel.
//!     #[config(table, example = "github = \"jane\"")]
//!     pub contacts: Option<BTreeMap<String, String>>,
//! }
//!
//! // Generates:
//! // - RawAuthor::FIELDS.name -> FieldPath("author.name")
//! // - RawAuthor::missing_required() -> ["name"] when `name` is None
//! // - RawAuthor::template() -> TOML string with comments
//! // - RawAuthor::template_with_header() -> with [author] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path (`""` for the root)
//! - `#[config(array)]` - Section is an array of tables (`[[path]]`)
//!
//! Field-level:
//! - `#[config(name = "x")]` - Custom key name (e.g. camelCase keys)
//! - `#[config(required)]` - Absence is reported by `missing_required()`
//! - `#[config(example = "x")]` - Value written into the template
//! - `#[config(inline_doc = "x")]` - Trailing comment in the template
//! - `#[config(sub)]` - Nested section, rendered with its own header
//! - `#[config(table)]` - Free-form key/value table, rendered commented
//! - `#[config(hidden)]` - Hide from template output
//! - `#[config(skip)]` - Skip from FIELDS and template
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `RawAuthor` → `author`
//! - `MenuItemConfig` → `menu_item`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS, missing_required() and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
