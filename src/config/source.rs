//! Config file formats and reading.

use std::fs;
use std::path::{Path, PathBuf};

use super::{ConfigDiagnostic, ConfigError, RawSiteConfig, SiteConfig, load_with_warnings};

/// On-disk representation of the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension (`.toml` or `.json`).
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Parse content, collecting any unknown fields.
///
/// Syntax errors and sections of the wrong shape (`menu = 5`) fail;
/// absent or invalid values, including values of the wrong type, are left
/// for [`load`](super::load) to report.
pub fn parse_with_ignored(
    content: &str,
    format: ConfigFormat,
) -> Result<(RawSiteConfig, Vec<String>), ConfigError> {
    let mut ignored = Vec::new();
    let on_ignored = |path: serde_ignored::Path| ignored.push(field_path(&path));

    let raw = match format {
        ConfigFormat::Toml => {
            let deserializer = toml::Deserializer::new(content);
            serde_ignored::deserialize(deserializer, on_ignored)?
        }
        ConfigFormat::Json => {
            let mut deserializer = serde_json::Deserializer::from_str(content);
            let raw = serde_ignored::deserialize(&mut deserializer, on_ignored)?;
            deserializer.end()?;
            raw
        }
    };

    Ok((raw, ignored))
}

/// Render an ignored key the way diagnostics name fields.
///
/// `Option` and newtype layers are skipped, so an unknown key under
/// `[author]` reads `author.age` and one in a menu entry `menu[1].icon`.
fn field_path(path: &serde_ignored::Path) -> String {
    use serde_ignored::Path;

    match path {
        Path::Root => String::new(),
        Path::Seq { parent, index } => format!("{}[{index}]", field_path(parent)),
        Path::Map { parent, key } => {
            let parent = field_path(parent);
            if parent.is_empty() {
                key.clone()
            } else {
                format!("{parent}.{key}")
            }
        }
        Path::Some { parent }
        | Path::NewtypeStruct { parent }
        | Path::NewtypeVariant { parent } => field_path(parent),
    }
}

/// A config file that has been read and validated.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    /// Path the config was read from
    pub path: PathBuf,
    pub format: ConfigFormat,
    pub config: SiteConfig,
    /// Dotted paths of keys that were ignored
    pub unknown_fields: Vec<String>,
    /// Non-fatal findings
    pub warnings: Vec<ConfigDiagnostic>,
}

impl ConfigFile {
    /// Read, parse and validate a config file.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (raw, unknown_fields) = parse_with_ignored(&content, format)?;
        let (config, warnings) = load_with_warnings(&raw)?;

        Ok(Self {
            path: path.to_path_buf(),
            format,
            config,
            unknown_fields,
            warnings,
        })
    }

    /// Fail if the file contained keys the config does not know.
    pub fn deny_unknown_fields(&self) -> Result<(), ConfigError> {
        if self.unknown_fields.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::UnknownFields(self.unknown_fields.clone()))
        }
    }
}
