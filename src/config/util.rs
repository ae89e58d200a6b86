//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Path component of a URL without surrounding slashes.
///
/// Returns `None` if the URL does not parse. Ports, credentials, query
/// strings and fragments are not part of the result.
///
/// # Examples
/// ```ignore
/// extract_url_path("https://example.github.io/blog/") -> Some("blog")
/// extract_url_path("https://example.com")             -> Some("")
/// extract_url_path("blog")                            -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    Some(parsed.path().trim_matches('/').to_string())
}

/// Find config file by searching upward from the current directory.
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Find config file by searching upward from `start`.
///
/// ```text
/// /home/user/site/content/posts/  ← start
/// /home/user/site/site.toml       ← found!
/// ```
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}
