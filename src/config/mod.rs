//! Site configuration loading and validation.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Raw (as written) and validated section types
//! │   ├── site       # root keys
//! │   ├── menu       # [[menu]]
//! │   └── author     # [author]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── path       # PathResolver
//! ├── source.rs      # File formats and ConfigFile
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Lifecycle
//!
//! A [`RawSiteConfig`] is deserialized from TOML or JSON with every key
//! optional. [`load`] turns it into a [`SiteConfig`] or fails with every
//! missing field and violated constraint at once. The result has no
//! setters; build it once at startup and hand `&SiteConfig` (or an
//! `Arc<SiteConfig>`) to whatever renders the site.

pub mod section;
pub mod source;
pub mod types;
mod util;

pub use section::{Author, MenuItem, RawAuthor, RawCount, RawMenuItem, RawSiteConfig};
pub use source::{ConfigFile, ConfigFormat, parse_with_ignored};
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, DiagnosticKind, FieldPath, PathResolver,
    RawText, describe, text_or_default,
};
pub use util::{extract_url_path, find_config_file, find_config_file_from};

use section::{
    check_not_blank, check_path_prefix, check_url, check_url_matches_prefix, validate_menu,
};
use serde::Serialize;
use std::num::NonZeroU32;
use std::path::Path;
use url::Url;

// ============================================================================
// root configuration
// ============================================================================

/// Validated site configuration.
///
/// Only obtainable through [`load`] (or the file helpers built on it), so
/// every instance satisfies the constraints checked there.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    url: String,
    path_prefix: String,
    title: String,
    subtitle: String,
    copyright: String,
    disqus_shortname: String,
    posts_per_page: NonZeroU32,
    google_analytics_id: String,
    menu: Vec<MenuItem>,
    author: Author,

    /// Parsed form of `url`
    #[serde(skip)]
    base_url: Url,
}

impl SiteConfig {
    /// Validate a raw record. Same as [`load`].
    pub fn from_raw(raw: &RawSiteConfig) -> Result<Self, ConfigError> {
        load(raw)
    }

    /// Parse and validate configuration text.
    ///
    /// Unknown keys are ignored here; use [`ConfigFile::read`] to see them.
    pub fn from_str(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let (raw, _) = parse_with_ignored(content, format)?;
        load(&raw)
    }

    /// Read, parse and validate a config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        ConfigFile::read(path).map(|file| file.config)
    }

    /// Site URL exactly as configured.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    /// Disqus shortname, `None` when comments are disabled.
    pub fn disqus_shortname(&self) -> Option<&str> {
        non_empty(&self.disqus_shortname)
    }

    pub fn disqus_shortname_raw(&self) -> &str {
        &self.disqus_shortname
    }

    /// Google Analytics ID, `None` when tracking is disabled.
    pub fn google_analytics_id(&self) -> Option<&str> {
        non_empty(&self.google_analytics_id)
    }

    pub fn google_analytics_id_raw(&self) -> &str {
        &self.google_analytics_id
    }

    pub fn posts_per_page(&self) -> NonZeroU32 {
        self.posts_per_page
    }

    /// Navigation entries in display order.
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Get path resolver for prefix-aware link generation.
    pub fn paths(&self) -> PathResolver<'_> {
        PathResolver::new(&self.base_url, &self.path_prefix)
    }

    /// Shorthand for `config.paths().resolve(path)`.
    pub fn resolve_path(&self, path: &str) -> String {
        self.paths().resolve(path)
    }

    /// Shorthand for `config.paths().absolute_url(path)`.
    pub fn absolute_url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.paths().absolute_url(path)
    }

    /// Number of listing pages needed for `total_posts`.
    ///
    /// An empty blog still has one (empty) index page.
    pub fn page_count(&self, total_posts: usize) -> usize {
        let per_page = self.posts_per_page.get() as usize;
        total_posts.div_ceil(per_page).max(1)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.trim().is_empty()).then_some(value)
}

// ============================================================================
// loading
// ============================================================================

/// Validate a raw record into a [`SiteConfig`].
///
/// Fails with [`ConfigError::Diagnostics`] listing every missing required
/// field and every violated constraint. Warnings are discarded; use
/// [`load_with_warnings`] to keep them.
pub fn load(raw: &RawSiteConfig) -> Result<SiteConfig, ConfigError> {
    load_with_warnings(raw).map(|(config, _)| config)
}

/// Like [`load`], also returning non-fatal warnings.
pub fn load_with_warnings(
    raw: &RawSiteConfig,
) -> Result<(SiteConfig, Vec<ConfigDiagnostic>), ConfigError> {
    let mut diag = ConfigDiagnostics::new();
    match validate(raw, &mut diag) {
        Some(config) => {
            let warnings = diag.into_result().map_err(ConfigError::Diagnostics)?;
            Ok((config, warnings))
        }
        None => Err(ConfigError::Diagnostics(diag)),
    }
}

/// Check every field of `raw`, collecting problems in `diag`.
///
/// Missing required fields are reported first, then constraint
/// violations in field order. Returns a config only when no error was
/// recorded.
pub fn validate(raw: &RawSiteConfig, diag: &mut ConfigDiagnostics) -> Option<SiteConfig> {
    for key in raw.missing_required() {
        diag.missing(FieldPath::new(key));
    }
    if raw.author.is_none() {
        diag.missing(RawAuthor::FIELDS.name);
    }

    let fields = RawSiteConfig::FIELDS;
    let url = raw.url.as_ref().and_then(|url| url.text(fields.url, diag));
    let base_url = url.and_then(|url| check_url(url, diag));
    let path_prefix = raw
        .path_prefix
        .as_ref()
        .and_then(|prefix| prefix.text(fields.path_prefix, diag))
        .filter(|prefix| check_path_prefix(prefix, diag));
    let title = raw
        .title
        .as_ref()
        .and_then(|title| title.text(fields.title.clone(), diag))
        .filter(|title| check_not_blank(title, fields.title, diag));
    let subtitle = text_or_default(raw.subtitle.as_ref(), fields.subtitle, diag);
    let copyright = text_or_default(raw.copyright.as_ref(), fields.copyright, diag);
    let disqus_shortname =
        text_or_default(raw.disqus_shortname.as_ref(), fields.disqus_shortname, diag);
    let google_analytics_id =
        text_or_default(raw.google_analytics_id.as_ref(), fields.google_analytics_id, diag);
    let posts_per_page = raw
        .posts_per_page
        .as_ref()
        .and_then(|count| count.to_positive(diag));
    let menu = validate_menu(raw.menu.as_deref().unwrap_or_default(), diag);
    let author = raw.author.as_ref().and_then(|author| author.validate(diag));

    if let (Some(base_url), Some(prefix)) = (&base_url, path_prefix) {
        check_url_matches_prefix(base_url, prefix, diag);
    }

    if diag.has_errors() {
        return None;
    }

    let (Some(url), Some(base_url), Some(path_prefix), Some(title)) =
        (url, base_url, path_prefix, title)
    else {
        return None;
    };
    let (Some(posts_per_page), Some(author)) = (posts_per_page, author) else {
        return None;
    };

    Some(SiteConfig {
        url: url.to_string(),
        path_prefix: path_prefix.to_string(),
        title: title.to_string(),
        subtitle,
        copyright,
        disqus_shortname,
        posts_per_page,
        google_analytics_id,
        menu,
        author,
        base_url,
    })
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Minimal valid document in TOML.
#[cfg(test)]
pub const TEST_MINIMAL_TOML: &str = r#"url = "https://example.com"
pathPrefix = "/"
title = "T"
postsPerPage = 4

[author]
name = "A"
"#;

/// Parse and validate the minimal document extended with `extra`.
///
/// `extra` is inserted after the minimal root keys, so it may start with
/// root keys of its own followed by tables. `[author]` is appended unless
/// `extra` defines it.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> Result<SiteConfig, ConfigError> {
    let (root, author) = TEST_MINIMAL_TOML
        .split_once("[author]")
        .expect("minimal document has an [author] table");
    let mut content = format!("{root}{extra}\n");
    if !extra.contains("[author]") {
        content.push_str("[author]");
        content.push_str(author);
    }
    let (raw, ignored) = parse_with_ignored(&content, ConfigFormat::Toml)?;
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    load(&raw)
}

/// Raw record equivalent to [`TEST_MINIMAL_TOML`].
#[cfg(test)]
pub fn test_minimal_raw() -> RawSiteConfig {
    RawSiteConfig {
        url: Some("https://example.com".into()),
        path_prefix: Some("/".into()),
        title: Some("T".into()),
        posts_per_page: Some(RawCount::Integer(4)),
        author: Some(RawAuthor {
            name: Some("A".into()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn full_raw() -> RawSiteConfig {
        let bio = "JS Dev. Love hacking around with React, build tools, and UI.";
        RawSiteConfig {
            url: Some("https://dennyscott.io".into()),
            path_prefix: Some("/".into()),
            title: Some("Blog by Denny Scott".into()),
            subtitle: Some(bio.into()),
            copyright: Some("© All rights reserved.".into()),
            disqus_shortname: Some(String::new().into()),
            posts_per_page: Some(RawCount::Integer(4)),
            google_analytics_id: Some("UA-143682716-1".into()),
            menu: Some(vec![
                RawMenuItem {
                    label: Some("Articles".into()),
                    path: Some("/".into()),
                },
                RawMenuItem {
                    label: Some("About".into()),
                    path: Some("/pages/about".into()),
                },
                RawMenuItem {
                    label: Some("Portfolio".into()),
                    path: Some("/pages/portfolio".into()),
                },
            ]),
            author: Some(RawAuthor {
                name: Some("Denny Scott".into()),
                photo: Some("/photo.jpg".into()),
                bio: Some(bio.into()),
                contacts: Some(BTreeMap::from([
                    ("twitter".to_string(), "@gitinbit".into()),
                    ("github".to_string(), "DennyScott".into()),
                ])),
            }),
        }
    }

    fn diagnostics(result: Result<SiteConfig, ConfigError>) -> ConfigDiagnostics {
        match result {
            Err(ConfigError::Diagnostics(diag)) => diag,
            other => panic!("expected diagnostics, got {other:?}"),
        }
    }

    #[test]
    fn test_accepted_fields_equal_input() {
        let raw = full_raw();
        let config = load(&raw).unwrap();

        assert_eq!(config.url(), "https://dennyscott.io");
        assert_eq!(config.path_prefix(), "/");
        assert_eq!(config.title(), "Blog by Denny Scott");
        assert_eq!(Some(config.subtitle()), raw.subtitle.as_ref().and_then(RawText::as_str));
        assert_eq!(config.copyright(), "© All rights reserved.");
        assert_eq!(config.disqus_shortname_raw(), "");
        assert_eq!(config.posts_per_page().get(), 4);
        assert_eq!(config.google_analytics_id_raw(), "UA-143682716-1");

        let menu: Vec<_> = config
            .menu()
            .iter()
            .map(|item| (item.label(), item.path()))
            .collect();
        assert_eq!(
            menu,
            [
                ("Articles", "/"),
                ("About", "/pages/about"),
                ("Portfolio", "/pages/portfolio")
            ]
        );

        let author = config.author();
        assert_eq!(author.name(), "Denny Scott");
        assert_eq!(author.photo(), "/photo.jpg");
        let raw_author = raw.author.as_ref().unwrap();
        assert_eq!(Some(author.bio()), raw_author.bio.as_ref().and_then(RawText::as_str));
        let raw_contacts = raw_author.contacts.as_ref().unwrap();
        assert_eq!(author.contacts().len(), raw_contacts.len());
        for (channel, handle) in raw_contacts {
            assert_eq!(author.contact(channel), handle.as_str());
        }
    }

    #[test]
    fn test_minimal_input_defaults_optional_fields() {
        let config = load(&test_minimal_raw()).unwrap();
        assert_eq!(config.subtitle(), "");
        assert_eq!(config.copyright(), "");
        assert_eq!(config.disqus_shortname_raw(), "");
        assert_eq!(config.google_analytics_id_raw(), "");
        assert!(config.menu().is_empty());
        assert!(config.author().contacts().is_empty());
        assert_eq!(config.author().photo(), "");
        assert_eq!(config.author().bio(), "");
    }

    #[test]
    fn test_missing_url() {
        let raw = RawSiteConfig {
            url: None,
            ..test_minimal_raw()
        };
        let diag = diagnostics(load(&raw));
        assert!(diag.is_missing("url"));
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_every_required_field_reported() {
        let diag = diagnostics(load(&RawSiteConfig::default()));
        for field in ["url", "pathPrefix", "title", "postsPerPage", "author.name"] {
            assert!(diag.is_missing(field), "{field} not reported");
        }
        assert_eq!(diag.len(), 5);
    }

    #[test]
    fn test_missing_author_name_inside_author() {
        let raw = RawSiteConfig {
            author: Some(RawAuthor {
                photo: Some("/me.png".into()),
                ..Default::default()
            }),
            ..test_minimal_raw()
        };
        let diag = diagnostics(load(&raw));
        assert!(diag.is_missing("author.name"));
    }

    #[test]
    fn test_non_positive_posts_per_page() {
        for count in [RawCount::Integer(0), RawCount::Integer(-1), RawCount::Float(1.5)] {
            let raw = RawSiteConfig {
                posts_per_page: Some(count),
                ..test_minimal_raw()
            };
            let diag = diagnostics(load(&raw));
            assert!(diag.is_invalid("postsPerPage"));
        }
    }

    #[test]
    fn test_path_prefix_without_slash() {
        let raw = RawSiteConfig {
            path_prefix: Some("pages".into()),
            ..test_minimal_raw()
        };
        let diag = diagnostics(load(&raw));
        assert!(diag.is_invalid("pathPrefix"));
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_duplicate_menu_label() {
        let mut raw = full_raw();
        raw.menu.as_mut().unwrap().push(RawMenuItem {
            label: Some("About".into()),
            path: Some("/about-again".into()),
        });
        let diag = diagnostics(load(&raw));
        assert!(diag.is_invalid("menu[3].label"));
    }

    #[test]
    fn test_all_violations_reported_together() {
        let raw = RawSiteConfig {
            url: Some("not a url".into()),
            path_prefix: Some("blog".into()),
            title: Some(String::new().into()),
            posts_per_page: Some(RawCount::Integer(0)),
            author: None,
            ..Default::default()
        };
        let diag = diagnostics(load(&raw));
        assert!(diag.is_missing("author.name"));
        for field in ["url", "pathPrefix", "title", "postsPerPage"] {
            assert!(diag.is_invalid(field), "{field} not reported");
        }
        // Missing fields come first
        assert_eq!(diag.errors()[0].kind, DiagnosticKind::MissingField);
    }

    #[test]
    fn test_load_is_idempotent() {
        let raw = full_raw();
        assert_eq!(load(&raw).unwrap(), load(&raw).unwrap());
    }

    #[test]
    fn test_warnings_do_not_fail_load() {
        let raw = RawSiteConfig {
            url: Some("https://example.github.io/blog".into()),
            ..test_minimal_raw()
        };
        let (config, warnings) = load_with_warnings(&raw).unwrap();
        assert_eq!(config.url(), "https://example.github.io/blog");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field.as_str(), "url");
    }

    #[test]
    fn test_feature_toggles() {
        let config = load(&full_raw()).unwrap();
        assert_eq!(config.disqus_shortname(), None);
        assert_eq!(config.google_analytics_id(), Some("UA-143682716-1"));
    }

    #[test]
    fn test_page_count() {
        let config = load(&full_raw()).unwrap();
        assert_eq!(config.page_count(0), 1);
        assert_eq!(config.page_count(4), 1);
        assert_eq!(config.page_count(5), 2);
        assert_eq!(config.page_count(9), 3);
    }

    #[test]
    fn test_menu_href_with_prefix() {
        let raw = RawSiteConfig {
            url: Some("https://example.github.io/blog".into()),
            path_prefix: Some("/blog".into()),
            ..full_raw()
        };
        let config = load(&raw).unwrap();
        let hrefs: Vec<_> = config.menu().iter().map(|m| m.href(&config)).collect();
        assert_eq!(hrefs, ["/blog/", "/blog/pages/about", "/blog/pages/portfolio"]);
        assert_eq!(
            config.absolute_url("/pages/about").unwrap().as_str(),
            "https://example.github.io/blog/pages/about"
        );
    }

    #[test]
    fn test_shared_across_threads() {
        use std::sync::Arc;

        let config = Arc::new(load(&full_raw()).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let config = Arc::clone(&config);
                std::thread::spawn(move || config.menu().len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 3);
        }
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config = test_parse_config("").unwrap();
        assert_eq!(config.title(), "T");
        assert_eq!(config.author().name(), "A");
    }

    #[test]
    fn test_parse_toml_with_menu_and_contacts() {
        let config = test_parse_config(
            r#"subtitle = "S"
googleAnalyticsId = "UA-1"

[[menu]]
label = "Articles"
path = "/"

[[menu]]
label = "About"
path = "/pages/about"

[author.contacts]
github = "someone"
"#,
        );
        // `[author]` is appended after `[author.contacts]`
        let config = config.unwrap();
        assert_eq!(config.subtitle(), "S");
        assert_eq!(config.menu().len(), 2);
        assert_eq!(config.author().contact("github"), Some("someone"));
    }

    #[test]
    fn test_parse_toml_string_posts_per_page() {
        let content = TEST_MINIMAL_TOML.replace("postsPerPage = 4", "postsPerPage = \"4\"");
        let diag = diagnostics(SiteConfig::from_str(&content, ConfigFormat::Toml));
        assert!(diag.is_invalid("postsPerPage"));
    }

    #[test]
    fn test_wrong_type_posts_per_page_is_invalid() {
        for value in ["[4]", "1979-05-27", "{ n = 4 }", "true", "4.5"] {
            let content =
                TEST_MINIMAL_TOML.replace("postsPerPage = 4", &format!("postsPerPage = {value}"));
            let diag = diagnostics(SiteConfig::from_str(&content, ConfigFormat::Toml));
            assert!(diag.is_invalid("postsPerPage"), "{value} not reported");
            assert_eq!(diag.len(), 1);
        }
    }

    #[test]
    fn test_whole_float_posts_per_page_from_json() {
        let content = r#"{"url": "https://example.com", "pathPrefix": "/", "title": "T",
            "postsPerPage": 4.0, "author": {"name": "A"}}"#;
        let config = SiteConfig::from_str(content, ConfigFormat::Json).unwrap();
        assert_eq!(config.posts_per_page().get(), 4);
    }

    #[test]
    fn test_wrong_type_text_fields_are_invalid() {
        let content = TEST_MINIMAL_TOML
            .replace("url = \"https://example.com\"", "url = 5")
            .replace("title = \"T\"", "title = [\"T\"]")
            .replace("name = \"A\"", "name = false");
        let diag = diagnostics(SiteConfig::from_str(&content, ConfigFormat::Toml));
        for field in ["url", "title", "author.name"] {
            assert!(diag.is_invalid(field), "{field} not reported");
        }
        assert_eq!(diag.find("url").unwrap().message, "must be a string, got integer 5");
    }

    #[test]
    fn test_wrong_type_in_json_menu_and_contacts() {
        let content = r#"{"url": "https://example.com", "pathPrefix": "/", "title": "T",
            "postsPerPage": 4, "subtitle": 7,
            "menu": [{"label": 1, "path": "/"}, {"label": "About", "path": null}],
            "author": {"name": "A", "contacts": {"github": 3}}}"#;
        let diag = diagnostics(SiteConfig::from_str(content, ConfigFormat::Json));
        assert!(diag.is_invalid("subtitle"));
        assert!(diag.is_invalid("menu[0].label"));
        assert!(diag.is_missing("menu[1].path"));
        assert!(diag.is_invalid("author.contacts.github"));
    }

    #[test]
    fn test_wrong_type_reported_with_other_problems() {
        let content = TEST_MINIMAL_TOML
            .replace("url = \"https://example.com\"", "url = 5")
            .replace("pathPrefix = \"/\"\n", "")
            .replace("postsPerPage = 4", "postsPerPage = [4]");
        let diag = diagnostics(SiteConfig::from_str(&content, ConfigFormat::Toml));
        assert!(diag.is_missing("pathPrefix"));
        assert!(diag.is_invalid("url"));
        assert!(diag.is_invalid("postsPerPage"));
        assert_eq!(diag.len(), 3);
    }
}
