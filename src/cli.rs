//! Command-line argument definitions for the `tintlog` demo binary.
//!
//! Uses [`clap`] derive macros for argument parsing.

use clap::Parser;

use crate::level::Severity;

/// Write colorized, level-filtered log lines to stdout.
///
/// Without MESSAGE arguments, emits one sample line per severity.
#[derive(Debug, Parser)]
#[command(name = "tintlog", version, about, long_about = None)]
pub struct Cli {
    /// Minimum severity level to display.
    ///
    /// Lines below this level are suppressed.
    #[arg(short = 'l', long, value_parser = parse_level_arg, default_value = "debug")]
    pub level: Severity,

    /// Severity to log the given MESSAGE arguments at.
    #[arg(short = 's', long, value_parser = parse_level_arg, default_value = "info")]
    pub severity: Severity,

    /// Omit the `YYYY-MM-DD HH:MM:SS` timestamp prefix.
    #[arg(short = 'T', long)]
    pub no_timestamp: bool,

    /// Omit the `[LEVEL]` tag.
    #[arg(short = 'L', long)]
    pub no_level: bool,

    /// Messages to log; one line each.
    pub messages: Vec<String>,
}

/// Parse level argument as case-insensitive string.
fn parse_level_arg(s: &str) -> Result<Severity, String> {
    s.parse::<Severity>().map_err(|e| e.to_string())
}
