//! Line formatter for accepted log messages.
//!
//! Output layout:
//! ```text
//! <color>YYYY-MM-DD HH:MM:SS [LEVEL] message<reset>\n
//! ```
//! The timestamp and tag are each optional; whatever prefix parts remain
//! are separated by single spaces, and no space is emitted when both are
//! disabled.

use crate::config::Config;
use crate::level::{RESET, Severity};
use crate::timestamp::format_timestamp;

/// Format one complete output line, terminator included, into `out`.
///
/// Does not consult the threshold; callers filter first.
pub fn format_line(
    level: Severity,
    message: &str,
    time: &jiff::Zoned,
    config: &Config,
    out: &mut String,
) {
    let display = level.display();
    out.push_str(display.color);

    let mut has_prefix = false;

    if config.show_timestamp {
        out.push_str(&format_timestamp(time));
        has_prefix = true;
    }

    if config.show_severity_tag {
        if has_prefix {
            out.push(' ');
        }
        out.push_str(display.label);
        has_prefix = true;
    }

    if has_prefix {
        out.push(' ');
    }
    out.push_str(message);
    out.push_str(RESET);
    out.push('\n');
}
