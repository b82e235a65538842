//! Error types for `tintlog`.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use thiserror::Error;

/// Errors that can occur in `tintlog`.
///
/// [`Logger::log`](crate::Logger::log) never surfaces any of these; only
/// [`Logger::try_log`](crate::Logger::try_log) and string parsing do.
#[derive(Debug, Error)]
pub enum LogError {
    /// Unrecognized severity name.
    #[error("invalid level '{0}': expected one of debug, info, warning, error")]
    InvalidLevel(String),

    /// I/O error while writing or flushing the sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
