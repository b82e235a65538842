//! The shared console logger.
//!
//! A [`Logger`] owns its [`Config`] and its sink behind one mutex. Every
//! accepted call holds the lock across config read, formatting, write and
//! flush, so concurrent callers never see torn settings and their lines
//! never interleave.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::config::Config;
use crate::error::LogError;
use crate::formatter::format_line;
use crate::level::Severity;
use crate::timestamp::{Clock, SystemClock};

static INSTANCE: OnceLock<Logger> = OnceLock::new();

struct State {
    config: Config,
    sink: Box<dyn Write + Send>,
}

/// Level-filtering, colorizing line logger.
pub struct Logger {
    state: Mutex<State>,
    clock: Box<dyn Clock>,
}

impl Logger {
    /// The process-wide logger, writing to stdout with default settings.
    ///
    /// Created on first access; every call returns the same reference.
    pub fn instance() -> &'static Self {
        INSTANCE.get_or_init(|| Self::new(io::stdout()))
    }

    /// A standalone logger over `sink`, independent of [`Logger::instance`].
    pub fn new(sink: impl Write + Send + 'static) -> Self {
        Self {
            state: Mutex::new(State {
                config: Config::default(),
                sink: Box::new(sink),
            }),
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the time source.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replace the initial settings.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .config = config;
        self
    }

    /// Snapshot of the current settings.
    pub fn config(&self) -> Config {
        self.lock().config
    }

    pub fn set_min_severity(&self, level: Severity) {
        self.lock().config.min_severity = level;
    }

    pub fn set_show_timestamp(&self, enabled: bool) {
        self.lock().config.show_timestamp = enabled;
    }

    pub fn set_show_severity_tag(&self, enabled: bool) {
        self.lock().config.show_severity_tag = enabled;
    }

    /// Emit `message` at `level` if it passes the threshold.
    ///
    /// Best effort: sink failures are discarded and this never panics.
    pub fn log(&self, level: Severity, message: &str) {
        let _ = self.try_log(level, message);
    }

    /// Like [`log`](Self::log), but reports the outcome.
    ///
    /// Returns `Ok(false)` when the message was below the threshold and
    /// `Ok(true)` once the full line has been written and flushed.
    pub fn try_log(&self, level: Severity, message: &str) -> Result<bool, LogError> {
        let mut state = self.lock();
        if !state.config.accepts(level) {
            return Ok(false);
        }

        let mut line = String::with_capacity(message.len() + 48);
        format_line(level, message, &self.clock.now(), &state.config, &mut line);

        state.sink.write_all(line.as_bytes())?;
        state.sink.flush()?;
        Ok(true)
    }

    pub fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(Severity::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    // Each mutation is a single field store, so a poisoned lock still
    // guards consistent data.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config())
            .finish_non_exhaustive()
    }
}
