//! Sitecfg - check, show and scaffold site configuration files.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use sitecfg::cli::{self, Cli, Commands};
use sitecfg::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Check { strict } => cli::check::check_config(&cli.config, *strict),
        Commands::Show { format } => cli::show::show_config(&cli.config, (*format).into()),
        Commands::Init { dry, force } => cli::init::init_config(&cli.config, *dry, *force),
    }
}
