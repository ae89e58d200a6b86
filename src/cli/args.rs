//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::ConfigFormat;

/// Site configuration checker
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(
        short = 'C',
        long,
        global = true,
        default_value = "site.toml",
        value_hint = clap::ValueHint::FilePath
    )]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the config file and report every problem
    #[command(visible_alias = "c")]
    Check {
        /// Fail on unknown fields and warnings too
        #[arg(short, long)]
        strict: bool,
    },

    /// Print the validated config
    #[command(visible_alias = "s")]
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ShowFormat::Toml)]
        format: ShowFormat,
    },

    /// Write a commented starter config
    #[command(visible_alias = "i")]
    Init {
        /// Print the template instead of writing it
        #[arg(long)]
        dry: bool,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format for `show`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowFormat {
    Toml,
    Json,
}

impl From<ShowFormat> for ConfigFormat {
    fn from(format: ShowFormat) -> Self {
        match format {
            ShowFormat::Toml => Self::Toml,
            ShowFormat::Json => Self::Json,
        }
    }
}
