//! Root section: site identity, features and pagination.
//!
//! ```toml
//! url = "https://example.com"
//! pathPrefix = "/"
//! title = "My Blog"
//! subtitle = "Notes on tooling"
//! copyright = "© All rights reserved."
//! disqusShortname = ""
//! postsPerPage = 4
//! googleAnalyticsId = ""
//! ```

use macros::Config;
use serde::Deserialize;
use std::num::NonZeroU32;
use url::Url;

use super::{RawAuthor, RawMenuItem};
use crate::config::util::extract_url_path;
use crate::config::{ConfigDiagnostics, FieldPath, RawText, describe};

/// Site configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "")]
pub struct RawSiteConfig {
    #[config(required, example = "https://example.com", inline_doc = "absolute site URL")]
    pub url: Option<RawText>,

    #[config(
        name = "pathPrefix",
        required,
        example = "/",
        inline_doc = "path the site is served under, starts with '/'"
    )]
    pub path_prefix: Option<RawText>,

    #[config(required, example = "My Blog", inline_doc = "site title")]
    pub title: Option<RawText>,

    #[config(inline_doc = "shown under the title")]
    pub subtitle: Option<RawText>,

    #[config(example = "© All rights reserved.", inline_doc = "footer notice")]
    pub copyright: Option<RawText>,

    /// Disqus shortname; comments are disabled when empty.
    #[config(name = "disqusShortname")]
    pub disqus_shortname: Option<RawText>,

    #[config(
        name = "postsPerPage",
        required,
        example = "4",
        inline_doc = "posts per listing page, at least 1"
    )]
    pub posts_per_page: Option<RawCount>,

    /// Google Analytics ID; tracking is disabled when empty.
    #[config(name = "googleAnalyticsId")]
    pub google_analytics_id: Option<RawText>,

    #[config(sub)]
    pub menu: Option<Vec<RawMenuItem>>,

    #[config(sub)]
    pub author: Option<RawAuthor>,
}

/// `postsPerPage` as written, before the positive-integer check.
///
/// Kept loose so a float, a quoted number or any other value is reported
/// as a validation error on the field instead of a parse error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawCount {
    Integer(i64),
    Float(f64),
    /// Must be placed last due to #[serde(untagged)].
    Other(serde_json::Value),
}

impl RawCount {
    /// Validate as a positive integer that fits in `u32`.
    ///
    /// Floats without a fractional part (`4.0`) count as integers, since
    /// JSON does not tell them apart.
    pub fn to_positive(&self, diag: &mut ConfigDiagnostics) -> Option<NonZeroU32> {
        let field = RawSiteConfig::FIELDS.posts_per_page;
        let hint = "use a whole number like `postsPerPage = 4`";
        let n = match self {
            Self::Integer(n) => *n,
            Self::Float(f) if f.fract() == 0.0 && f.abs() < 1e18 => *f as i64,
            Self::Float(f) => {
                diag.error_with_hint(field, format!("must be an integer, got {f}"), hint);
                return None;
            }
            Self::Other(value) => {
                let got = describe(value);
                diag.error_with_hint(field, format!("must be an integer, got {got}"), hint);
                return None;
            }
        };

        if n <= 0 {
            diag.error_with_hint(field, format!("must be at least 1, got {n}"), hint);
            return None;
        }
        match u32::try_from(n).ok().and_then(NonZeroU32::new) {
            Some(count) => Some(count),
            None => {
                diag.error(field, format!("{n} is too large"));
                None
            }
        }
    }
}

/// Check that `url` is an absolute http(s) URL with a host.
pub fn check_url(url_str: &str, diag: &mut ConfigDiagnostics) -> Option<Url> {
    let field = RawSiteConfig::FIELDS.url;
    let hint = "use format like https://example.com";

    match Url::parse(url_str) {
        Ok(parsed) => {
            // Must be http or https
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    hint,
                );
                return None;
            }
            // Must have a valid host
            if parsed.host_str().is_none_or(str::is_empty) {
                diag.error_with_hint(field, "URL must have a valid host", hint);
                return None;
            }
            Some(parsed)
        }
        Err(e) => {
            diag.error_with_hint(field, format!("invalid URL: {e}"), hint);
            None
        }
    }
}

/// Check that `pathPrefix` is a site-absolute path.
pub fn check_path_prefix(prefix: &str, diag: &mut ConfigDiagnostics) -> bool {
    if prefix.starts_with('/') {
        return true;
    }
    diag.error_with_hint(
        RawSiteConfig::FIELDS.path_prefix,
        format!("must start with '/', got \"{prefix}\""),
        format!("use \"/{}\"", prefix.trim_start_matches('/')),
    );
    false
}

/// Warn when the path in `url` disagrees with `pathPrefix`.
///
/// `https://example.github.io/blog` deployed with `pathPrefix = "/"`
/// usually means one of the two is stale.
pub fn check_url_matches_prefix(url: &Url, prefix: &str, diag: &mut ConfigDiagnostics) {
    let Some(url_path) = extract_url_path(url.as_str()) else {
        return;
    };
    if url_path.is_empty() {
        return;
    }
    if url_path != prefix.trim_matches('/') {
        diag.warn(
            RawSiteConfig::FIELDS.url,
            format!(
                "URL path '/{url_path}' differs from {} \"{prefix}\"",
                RawSiteConfig::FIELDS.path_prefix.as_str()
            ),
        );
    }
}

/// Check that a required text field is not blank.
pub fn check_not_blank(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) -> bool {
    if value.trim().is_empty() {
        diag.error(field, "must not be empty");
        return false;
    }
    true
}
