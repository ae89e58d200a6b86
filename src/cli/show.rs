//! `show` command: print the validated config.

use anyhow::{Context, Result};
use std::path::Path;

use super::common::{load_config, report_warnings};
use crate::config::{ConfigFormat, SiteConfig};

/// Load the config and print it in `format`.
pub fn show_config(config: &Path, format: ConfigFormat) -> Result<()> {
    let file = load_config(config)?;
    report_warnings(&file);
    print!("{}", render(&file.config, format)?);
    Ok(())
}

/// Serialize a validated config.
pub fn render(config: &SiteConfig, format: ConfigFormat) -> Result<String> {
    let mut out = match format {
        ConfigFormat::Toml => {
            toml::to_string_pretty(config).context("Failed to serialize config as TOML")?
        }
        ConfigFormat::Json => {
            serde_json::to_string_pretty(config).context("Failed to serialize config as JSON")?
        }
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
