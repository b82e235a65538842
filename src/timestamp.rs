//! Wall-clock access and timestamp rendering.
//!
//! The logger reads time through the [`Clock`] trait so tests can pin it.
//! [`SystemClock`] reports the current time in the system's local time
//! zone; jiff falls back to UTC when that zone cannot be determined.

/// strftime pattern for the timestamp prefix (`YYYY-MM-DD HH:MM:SS`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> jiff::Zoned;
}

/// The real clock, in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> jiff::Zoned {
        jiff::Zoned::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone)]
pub struct FixedClock(pub jiff::Zoned);

impl Clock for FixedClock {
    fn now(&self) -> jiff::Zoned {
        self.0.clone()
    }
}

/// Render `time` as `YYYY-MM-DD HH:MM:SS` in its own time zone.
///
/// Sub-second precision is truncated, never rounded.
pub fn format_timestamp(time: &jiff::Zoned) -> String {
    time.strftime(TIMESTAMP_FORMAT).to_string()
}
