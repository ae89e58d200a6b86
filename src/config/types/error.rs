//! Configuration error types.

use super::FieldPath;
use owo_colors::{OwoColorize, Stream};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config file parsing error")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format `{0}`, expected a .toml or .json file")]
    UnsupportedFormat(PathBuf),

    #[error("unknown config fields: {}", .0.join(", "))]
    UnknownFields(Vec<String>),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// What went wrong with a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A required field is absent.
    MissingField,
    /// A present field violates its constraint.
    Validation,
    /// Not fatal; reported alongside a successful load.
    Warning,
}

impl DiagnosticKind {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MissingField => "missing field",
            Self::Validation => "invalid value",
            Self::Warning => "warning",
        }
    }
}

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub kind: DiagnosticKind,
    /// Config field path (e.g., "menu[1].label")
    pub field: FieldPath,
    /// Violated constraint
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(kind: DiagnosticKind, field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            kind,
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{}",
            "[".if_supports_color(Stream::Stderr, |s| s.dimmed()),
            self.field
                .as_str()
                .if_supports_color(Stream::Stderr, |s| s.cyan()),
            "]".if_supports_color(Stream::Stderr, |s| s.dimmed()),
        )?;
        write!(
            f,
            "{} {}: {}",
            "→".if_supports_color(Stream::Stderr, |s| s.red()),
            self.kind.label(),
            self.message
        )?;
        if let Some(hint) = &self.hint {
            write!(
                f,
                "\n  {} {}",
                "hint:".if_supports_color(Stream::Stderr, |s| s.yellow()),
                hint
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Errors and warnings collected while validating one config.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    warnings: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an absent required field.
    pub fn missing(&mut self, field: FieldPath) {
        self.errors.push(ConfigDiagnostic::new(
            DiagnosticKind::MissingField,
            field,
            "required field is not set",
        ));
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(
            DiagnosticKind::Validation,
            field,
            message,
        ));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors.push(
            ConfigDiagnostic::new(DiagnosticKind::Validation, field, message).with_hint(hint),
        );
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push(ConfigDiagnostic::new(
            DiagnosticKind::Warning,
            field,
            message,
        ));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    /// First error reported for `field`.
    pub fn find(&self, field: &str) -> Option<&ConfigDiagnostic> {
        self.errors.iter().find(|d| d.field.as_str() == field)
    }

    /// True if `field` was reported as a missing required field.
    pub fn is_missing(&self, field: &str) -> bool {
        self.errors
            .iter()
            .any(|d| d.kind == DiagnosticKind::MissingField && d.field.as_str() == field)
    }

    /// True if `field` was reported as violating a constraint.
    pub fn is_invalid(&self, field: &str) -> bool {
        self.errors
            .iter()
            .any(|d| d.kind == DiagnosticKind::Validation && d.field.as_str() == field)
    }

    /// Convert to Result: warnings on success, everything on failure.
    pub fn into_result(self) -> Result<Vec<ConfigDiagnostic>, Self> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}\n",
            "config validation failed:".if_supports_color(Stream::Stderr, |s| s.red())
        )?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(f, "\n\nfound {} errors", self.errors.len())?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("site.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("site.toml"));

        let unknown = ConfigError::UnknownFields(vec!["theme".into(), "author.age".into()]);
        assert_eq!(
            format!("{unknown}"),
            "unknown config fields: theme, author.age"
        );
    }

    #[test]
    fn test_diagnostics_kinds() {
        let mut diag = ConfigDiagnostics::new();
        diag.missing(FieldPath::new("url"));
        diag.error(FieldPath::new("pathPrefix"), "must start with '/'");
        diag.warn(FieldPath::new("author.contacts.github"), "empty handle");

        assert_eq!(diag.len(), 2);
        assert!(diag.is_missing("url"));
        assert!(!diag.is_invalid("url"));
        assert!(diag.is_invalid("pathPrefix"));
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.into_result().is_err());
    }

    #[test]
    fn test_into_result_returns_warnings() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("url"), "path differs from pathPrefix");
        let warnings = diag.into_result().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, DiagnosticKind::Warning);
    }

    #[test]
    fn test_diagnostic_display_names_field_and_hint() {
        let diag = ConfigDiagnostic::new(
            DiagnosticKind::Validation,
            FieldPath::new("postsPerPage"),
            "must be a positive integer",
        )
        .with_hint("e.g. postsPerPage = 4");
        let display = format!("{diag}");
        assert!(display.contains("postsPerPage"));
        assert!(display.contains("must be a positive integer"));
        assert!(display.contains("hint:"));
    }
}
