//! Link resolution against `url` and `pathPrefix`.

use url::Url;

/// Resolves site-absolute paths for deployment under a path prefix.
///
/// The single place where `pathPrefix` is applied, so templates and menu
/// rendering never concatenate prefixes by hand.
///
/// # Example
/// ```ignore
/// let paths = config.paths();
/// paths.resolve("/pages/about");        // "/blog/pages/about"
/// paths.absolute_url("/pages/about")?;  // https://example.com/blog/pages/about
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    base: &'a Url,
    prefix: &'a str,
}

impl<'a> PathResolver<'a> {
    pub fn new(base: &'a Url, prefix: &'a str) -> Self {
        Self { base, prefix }
    }

    /// Prefix without trailing slash (`"/"` becomes `""`).
    pub fn prefix(&self) -> &'a str {
        self.prefix.trim_end_matches('/')
    }

    /// Apply the prefix to a site-absolute path.
    ///
    /// Relative paths, fragments, protocol-relative and full URLs are
    /// returned unchanged.
    pub fn resolve(&self, path: &str) -> String {
        if !path.starts_with('/') || path.starts_with("//") {
            return path.to_string();
        }
        let prefix = self.prefix();
        if prefix.is_empty() || path == prefix || path.starts_with(&format!("{prefix}/")) {
            return path.to_string();
        }
        format!("{prefix}{path}")
    }

    /// Absolute URL for a path, relative to the site URL.
    pub fn absolute_url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base.join(&self.resolve(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com").unwrap()
    }

    #[test]
    fn test_root_prefix_is_noop() {
        let base = base();
        let paths = PathResolver::new(&base, "/");
        assert_eq!(paths.prefix(), "");
        assert_eq!(paths.resolve("/pages/about"), "/pages/about");
        assert_eq!(paths.resolve("/"), "/");
    }

    #[test]
    fn test_prefix_applied_to_absolute_paths() {
        let base = base();
        let paths = PathResolver::new(&base, "/blog/");
        assert_eq!(paths.resolve("/pages/about"), "/blog/pages/about");
        assert_eq!(paths.resolve("/"), "/blog/");
        // Already prefixed
        assert_eq!(paths.resolve("/blog/posts"), "/blog/posts");
        // Shares a leading segment name only
        assert_eq!(paths.resolve("/blogroll"), "/blog/blogroll");
    }

    #[test]
    fn test_non_site_paths_untouched() {
        let base = base();
        let paths = PathResolver::new(&base, "/blog");
        assert_eq!(paths.resolve("pages/about"), "pages/about");
        assert_eq!(paths.resolve("#top"), "#top");
        assert_eq!(paths.resolve("//cdn.example.com/a.js"), "//cdn.example.com/a.js");
        assert_eq!(
            paths.resolve("https://github.com/someone"),
            "https://github.com/someone"
        );
    }

    #[test]
    fn test_absolute_url() {
        let base = base();
        let paths = PathResolver::new(&base, "/blog");
        assert_eq!(
            paths.absolute_url("/pages/about").unwrap().as_str(),
            "https://example.com/blog/pages/about"
        );
        assert_eq!(
            paths.absolute_url("https://other.org/x").unwrap().as_str(),
            "https://other.org/x"
        );
    }
}
