//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error and diagnostic types     |
//! | `field`  | Field paths used in diagnostics              |
//! | `path`   | Link resolution with `pathPrefix`            |
//! | `raw`    | Loosely typed values checked at validation   |

mod error;
mod field;
mod path;
mod raw;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, DiagnosticKind};
pub use field::FieldPath;
pub use path::PathResolver;
pub use raw::{RawText, describe, text_or_default};
