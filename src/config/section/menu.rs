//! `[[menu]]` navigation entries.
//!
//! ```toml
//! [[menu]]
//! label = "Articles"
//! path = "/"
//!
//! [[menu]]
//! label = "About"
//! path = "/pages/about"
//! ```

use macros::Config;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::RawSiteConfig;
use super::site::check_not_blank;
use crate::config::{ConfigDiagnostics, RawText, SiteConfig};

/// Navigation menu, rendered in the order written.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Config)]
#[serde(default)]
#[config(section = "menu", array)]
pub struct RawMenuItem {
    #[config(required, example = "Articles", inline_doc = "link text, unique within the menu")]
    pub label: Option<RawText>,

    #[config(required, example = "/", inline_doc = "target path, absolute or relative")]
    pub path: Option<RawText>,
}

/// A validated navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    label: String,
    path: String,
}

impl MenuItem {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Target path exactly as configured.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Target path with the site's `pathPrefix` applied.
    pub fn href(&self, config: &SiteConfig) -> String {
        config.paths().resolve(&self.path)
    }
}

/// Validate menu entries in order.
///
/// Every entry is checked so all problems are reported together; only
/// fully valid entries are returned.
pub fn validate_menu(items: &[RawMenuItem], diag: &mut ConfigDiagnostics) -> Vec<MenuItem> {
    let base = RawSiteConfig::FIELDS.menu;
    let mut first_seen: FxHashMap<&str, usize> = FxHashMap::default();
    let mut menu = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
        let at = base.index(i);

        for key in item.missing_required() {
            diag.missing(at.join(key));
        }

        let label = item
            .label
            .as_ref()
            .and_then(|label| label.text(at.join("label"), diag))
            .filter(|label| check_not_blank(label, at.join("label"), diag));

        let mut duplicate = false;
        if let Some(label) = label
            && let Some(first) = first_seen.insert(label, i)
        {
            // Keep pointing at the first occurrence for later duplicates
            first_seen.insert(label, first);
            diag.error_with_hint(
                at.join("label"),
                format!("duplicate menu label \"{label}\""),
                format!("already used by {}", base.index(first).as_str()),
            );
            duplicate = true;
        }

        let path = item
            .path
            .as_ref()
            .and_then(|path| path.text(at.join("path"), diag))
            .filter(|path| check_not_blank(path, at.join("path"), diag));

        if !duplicate && let (Some(label), Some(path)) = (label, path) {
            menu.push(MenuItem {
                label: label.to_string(),
                path: path.to_string(),
            });
        }
    }

    menu
}
