//! `check` command: validate the config and report every problem.

use anyhow::{Result, bail};
use std::path::Path;

use super::common::{load_config, report_warnings};
use crate::{debug, logger};

/// Validate the config at `config`.
///
/// With `strict`, unknown fields and warnings also fail the check.
pub fn check_config(config: &Path, strict: bool) -> Result<()> {
    let file = load_config(config)?;
    report_warnings(&file);

    let site = &file.config;
    debug!("config"; "url {} under prefix {}", site.url(), site.path_prefix());
    debug!("config"; "{} menu entries, {} contacts",
        site.menu().len(), site.author().contacts().len());

    if strict {
        file.deny_unknown_fields()?;
        let count = file.warnings.len();
        if count > 0 {
            bail!(
                "{} warning{} in strict mode",
                count,
                if count == 1 { "" } else { "s" }
            );
        }
    }

    logger::status_success(&format!("{} is valid", file.path.display()));
    Ok(())
}
