//! Severity representation with parsing, display labels, and color codes.
//!
//! The label/color pairs live in a fixed table indexed by the severity's
//! ordinal, so lookups never allocate and the mapping cannot drift.

use std::fmt;
use std::str::FromStr;

use owo_colors::Color;
use owo_colors::colors::{Blue, Green, Red, Yellow};

use crate::error::LogError;

/// ANSI sequence appended after every emitted line, regardless of severity.
pub const RESET: &str = "\x1b[0m";

/// Canonical severity enumeration.
///
/// Ordered by importance (ascending) for `>=` filtering via [`Ord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
}

/// Display label and ANSI foreground color for one severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityDisplay {
    pub label: &'static str,
    pub color: &'static str,
}

/// Label and color table, indexed by [`Severity`] discriminant.
const DISPLAY: [SeverityDisplay; 4] = [
    SeverityDisplay {
        label: "[DEBUG]",
        color: Blue::ANSI_FG,
    },
    SeverityDisplay {
        label: "[INFO]",
        color: Green::ANSI_FG,
    },
    SeverityDisplay {
        label: "[WARNING]",
        color: Yellow::ANSI_FG,
    },
    SeverityDisplay {
        label: "[ERROR]",
        color: Red::ANSI_FG,
    },
];

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Self; 4] = [Self::Debug, Self::Info, Self::Warning, Self::Error];

    /// Label and color for this severity.
    pub const fn display(self) -> SeverityDisplay {
        DISPLAY[self as usize]
    }

    /// Bracketed tag written in front of the message (e.g., `"[INFO]"`).
    pub const fn label(self) -> &'static str {
        self.display().label
    }

    /// ANSI foreground sequence for this severity.
    ///
    /// - Debug: blue
    /// - Info: green
    /// - Warning: yellow
    /// - Error: red
    pub const fn color(self) -> &'static str {
        self.display().color
    }

    /// Lowercase canonical name, as accepted on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Parse a string into a [`Severity`], case-insensitive.
    ///
    /// Returns `None` for unrecognized strings.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "debug" | "dbg" => Some(Self::Debug),
            "info" | "inf" | "information" => Some(Self::Info),
            "warning" | "warn" | "wrn" => Some(Self::Warning),
            "error" | "err" => Some(Self::Error),
            _ => None,
        }
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| LogError::InvalidLevel(s.to_string()))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
