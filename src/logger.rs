//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, only printed with `--verbose`
//! - status lines (`✓`, `✗`, `⚠`) for command results
//!
//! # Example
//!
//! ```ignore
//! log!("config"; "loaded {}", path.display());
//! debug!("config"; "{} menu entries", config.menu().len());
//! logger::status_success("site.toml is valid");
//! ```

use owo_colors::{OwoColorize, Stream};
use std::io::{Write, stdout};
use std::sync::atomic::{AtomicBool, Ordering};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    let styled = prefix.if_supports_color(Stream::Stdout, |p| match module_lower {
        "config" => p.bright_blue().bold().to_string(),
        "init" => p.bright_green().bold().to_string(),
        "error" => p.bright_red().bold().to_string(),
        "warn" => p.yellow().bold().to_string(),
        _ => p.bright_yellow().bold().to_string(),
    });
    styled.to_string()
}

// ============================================================================
// Status Lines
// ============================================================================

/// Success line (✓ prefix, green).
pub fn status_success(message: &str) {
    let symbol = "✓".if_supports_color(Stream::Stdout, |s| s.green()).to_string();
    status(&symbol, message);
}

/// Error line (✗ prefix, red) with optional detail below.
pub fn status_error(summary: &str, detail: &str) {
    let message = if detail.is_empty() {
        summary.to_string()
    } else {
        format!("{summary}\n{detail}")
    };
    let symbol = "✗".if_supports_color(Stream::Stdout, |s| s.red()).to_string();
    status(&symbol, &message);
}

/// Warning line (⚠ prefix, yellow).
pub fn status_warning(detail: &str) {
    let symbol = "⚠".if_supports_color(Stream::Stdout, |s| s.yellow()).to_string();
    status(&symbol, detail);
}

fn status(symbol: &str, message: &str) {
    let mut stdout = stdout().lock();
    writeln!(stdout, "{symbol} {message}").ok();
    stdout.flush().ok();
}
