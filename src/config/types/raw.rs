//! Loosely typed values, checked during validation.
//!
//! A key holding the wrong type (`url = 5`, `postsPerPage = [4]`) must not
//! abort parsing: it is kept as written and reported as an invalid value
//! together with every other problem.

use serde::Deserialize;
use serde_json::Value;

use super::{ConfigDiagnostics, FieldPath};

/// A text value as written.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawText {
    Text(String),
    /// Anything that is not a string.
    /// Must be placed last due to #[serde(untagged)].
    Other(Value),
}

impl RawText {
    /// The string, if the value is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            Self::Other(_) => None,
        }
    }

    /// The string, or a validation error on `field`.
    pub fn text(&self, field: FieldPath, diag: &mut ConfigDiagnostics) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            Self::Other(value) => {
                diag.error_with_hint(
                    field,
                    format!("must be a string, got {}", describe(value)),
                    "wrap the value in quotes",
                );
                None
            }
        }
    }
}

impl From<&str> for RawText {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawText {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Optional text field: empty when absent, reported when not a string.
pub fn text_or_default(
    value: Option<&RawText>,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) -> String {
    value
        .and_then(|value| value.text(field, diag))
        .unwrap_or_default()
        .to_string()
}

/// Short description of a value for diagnostics (`integer 5`, `an array`).
pub fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) if n.is_f64() => format!("float {n}"),
        Value::Number(n) => format!("integer {n}"),
        Value::String(s) => format!("string \"{s}\""),
        Value::Array(_) => "an array".to_string(),
        // TOML datetimes also arrive as tables
        Value::Object(_) => "a table".to_string(),
    }
}
