//! Logger settings.
//!
//! Merges settings from two sources (highest precedence first):
//! 1. CLI flags
//! 2. Built-in defaults

use crate::cli::Cli;
use crate::level::Severity;

/// The mutable settings of a [`Logger`](crate::Logger).
///
/// Use [`Config::from_cli`] to build from parsed CLI arguments, or
/// [`Config::default`] for built-in defaults (useful in tests and benchmarks).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Minimum severity to emit; lines below this are suppressed.
    pub min_severity: Severity,
    /// Prefix each line with `YYYY-MM-DD HH:MM:SS`.
    pub show_timestamp: bool,
    /// Prefix each line with the `[LEVEL]` tag.
    pub show_severity_tag: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_severity: Severity::Info,
            show_timestamp: true,
            show_severity_tag: true,
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Self::default();

        config.min_severity = cli.level;

        if cli.no_timestamp {
            config.show_timestamp = false;
        }
        if cli.no_level {
            config.show_severity_tag = false;
        }

        config
    }

    /// Whether a line at `level` passes the threshold.
    pub fn accepts(&self, level: Severity) -> bool {
        level >= self.min_severity
    }
}
