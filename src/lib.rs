//! `tintlog` — a process-wide, level-filtered, colorized console logger.
//!
//! Messages below the configured minimum [`Severity`] are dropped; the rest
//! are written as one line each, wrapped in the severity's ANSI color and
//! optionally prefixed with a `YYYY-MM-DD HH:MM:SS` timestamp and a
//! `[LEVEL]` tag.
//!
//! # Example
//!
//! ```
//! use tintlog::{Logger, MemorySink, Severity};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new(sink.clone());
//! logger.set_show_timestamp(false);
//!
//! logger.log(Severity::Debug, "dropped");
//! logger.log(Severity::Warning, "disk almost full");
//! assert_eq!(sink.contents(), "\x1b[33m[WARNING] disk almost full\x1b[0m\n");
//! ```
//!
//! Use [`Logger::instance`] for the shared stdout logger.

pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod level;
pub mod logger;
pub mod sink;
pub mod timestamp;

// Re-export primary API types for convenience.
pub use config::Config;
pub use error::LogError;
pub use formatter::format_line;
pub use level::{RESET, Severity, SeverityDisplay};
pub use logger::Logger;
pub use sink::MemorySink;
pub use timestamp::{Clock, FixedClock, SystemClock};
