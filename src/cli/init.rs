//! `init` command: write a commented starter config.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::RawSiteConfig;
use crate::log;

/// Generate site.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# Site configuration file (sitecfg v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Run `sitecfg check` after editing.\n\n");

    out.push_str(&RawSiteConfig::template_with_header());
    out
}

/// Write the starter config to `path`, or print it with `dry`.
pub fn init_config(path: &Path, dry: bool, force: bool) -> Result<()> {
    let content = generate_config_template();
    if dry {
        print!("{content}");
        return Ok(());
    }

    if path.exists() && !force {
        bail!(
            "`{}` already exists, pass --force to overwrite it",
            path.display()
        );
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
