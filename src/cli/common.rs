//! Common utilities shared across CLI commands.

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

use crate::config::{ConfigError, ConfigFile, find_config_file};
use crate::{debug, log, logger};

/// Locate the config file named by `--config`.
///
/// Relative names are searched upward from the current directory.
pub fn locate_config(config: &Path) -> Result<PathBuf> {
    match find_config_file(config) {
        Some(path) => {
            debug!("config"; "using {}", path.display());
            Ok(path)
        }
        None => bail!(
            "config file `{}` not found in this directory or any parent, \
             run `sitecfg init` to create one",
            config.display()
        ),
    }
}

/// Locate and load the config, printing diagnostics on failure.
pub fn load_config(config: &Path) -> Result<ConfigFile> {
    let path = locate_config(config)?;
    match ConfigFile::read(&path) {
        Ok(file) => Ok(file),
        Err(ConfigError::Diagnostics(diag)) => {
            report_errors(&path, &diag.to_string(), diag.len());
            bail!("invalid configuration in `{}`", path.display())
        }
        Err(e) => Err(e.into()),
    }
}

/// Print warnings and unknown fields of a loaded file.
pub fn report_warnings(file: &ConfigFile) {
    for warning in &file.warnings {
        logger::status_warning(&warning.to_string());
    }
    for field in &file.unknown_fields {
        log!("warn"; "unknown field `{}` is ignored", field);
    }
}

fn report_errors(path: &Path, detail: &str, count: usize) {
    let summary = format!(
        "{} has {} error{}",
        path.display(),
        count,
        if count == 1 { "" } else { "s" }
    );
    logger::status_error(&summary, detail);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TEST_MINIMAL_TOML;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_absolute_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, TEST_MINIMAL_TOML).unwrap();

        let file = load_config(&path).unwrap();
        assert_eq!(file.path, path);
        assert_eq!(file.config.title(), "T");
    }

    #[test]
    fn test_load_config_reports_invalid() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.toml");
        let content = TEST_MINIMAL_TOML.replace("postsPerPage = 4", "postsPerPage = 0");
        fs::write(&path, content).unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("invalid configuration"));
    }

    #[test]
    fn test_locate_missing_config() {
        let temp = TempDir::new().unwrap();
        assert!(locate_config(&temp.path().join("site.toml")).is_err());
    }
}
