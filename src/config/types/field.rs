//! Type-safe config field path.

use owo_colors::{OwoColorize, Stream};
use std::borrow::Cow;
use std::fmt;

/// A config field path such as `author.name` or `menu[1].label`.
///
/// Static paths come from `#[derive(Config)]`; indexed or keyed paths
/// are built at runtime with [`FieldPath::index`] and [`FieldPath::join`].
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "author")]
/// pub struct RawAuthor {
///     pub name: Option<String>,
/// }
///
/// // Generated:
/// impl RawAuthor {
///     pub const FIELDS: RawAuthorFields = ...;
/// }
///
/// // Usage:
/// diag.missing(RawAuthor::FIELDS.name);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Child key under this path (`author` + `name` -> `author.name`).
    pub fn join(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self(Cow::Owned(key.to_string()))
        } else {
            Self(Cow::Owned(format!("{}.{}", self.0, key)))
        }
    }

    /// Array element under this path (`menu` + 1 -> `menu[1]`).
    pub fn index(&self, i: usize) -> Self {
        Self(Cow::Owned(format!("{}[{}]", self.0, i)))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        write!(
            f,
            "{}",
            quoted.if_supports_color(Stream::Stderr, |s| s.bright_blue())
        )
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for FieldPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
