//! Sitecfg - site configuration loading and validation for blog generators.
//!
//! Load a config file once at startup, then share the resulting
//! [`SiteConfig`] with everything that renders the site:
//!
//! ```no_run
//! use sitecfg::config::SiteConfig;
//! use std::path::Path;
//!
//! let config = SiteConfig::from_path(Path::new("site.toml"))?;
//! for item in config.menu() {
//!     println!("{} -> {}", item.label(), item.href(&config));
//! }
//! # Ok::<(), sitecfg::config::ConfigError>(())
//! ```

pub mod cli;
pub mod config;
pub mod logger;

pub use config::{ConfigError, SiteConfig, load};
