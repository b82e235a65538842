//! Integration tests for severity filtering through the public API.

use tintlog::{Logger, MemorySink, Severity};

fn logger_with_sink() -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    (Logger::new(sink.clone()), sink)
}

#[test]
fn warning_threshold_shows_warning_and_error() {
    let (logger, sink) = logger_with_sink();
    logger.set_min_severity(Severity::Warning);

    logger.log(Severity::Debug, "Debug message");
    logger.log(Severity::Info, "Info message");
    logger.log(Severity::Warning, "Warning message");
    logger.log(Severity::Error, "Error message");

    let out = sink.contents();
    assert!(!out.contains("Debug message"), "debug should be filtered");
    assert!(!out.contains("Info message"), "info should be filtered");
    assert!(out.contains("Warning message"), "warning should pass");
    assert!(out.contains("Error message"), "error should pass");
    assert_eq!(out.lines().count(), 2);
}

#[test]
fn error_threshold_shows_only_error() {
    let (logger, sink) = logger_with_sink();
    logger.set_min_severity(Severity::Error);

    for level in Severity::ALL {
        logger.log(level, &format!("{level} message"));
    }

    let out = sink.contents();
    assert!(!out.contains("debug message"));
    assert!(!out.contains("info message"));
    assert!(!out.contains("warning message"));
    assert!(out.contains("error message"));
}

#[test]
fn debug_threshold_shows_all() {
    let (logger, sink) = logger_with_sink();
    logger.set_min_severity(Severity::Debug);

    for level in Severity::ALL {
        logger.log(level, "m");
    }

    assert_eq!(sink.contents().lines().count(), 4);
}

#[test]
fn lowering_threshold_takes_effect_immediately() {
    let (logger, sink) = logger_with_sink();

    logger.log(Severity::Debug, "first debug");
    assert!(sink.is_empty(), "default threshold is info");

    logger.set_min_severity(Severity::Debug);
    logger.log(Severity::Debug, "second debug");
    let out = sink.take();
    assert!(out.contains("DEBUG"));
    assert!(out.contains("second debug"));

    logger.set_min_severity(Severity::Info);
    logger.log(Severity::Debug, "third debug");
    logger.log(Severity::Info, "Info message");
    let out = sink.contents();
    assert!(!out.contains("third debug"));
    assert!(out.contains("Info message"));
}

#[test]
fn setting_threshold_twice_is_idempotent() {
    let (once, once_sink) = logger_with_sink();
    let (twice, twice_sink) = logger_with_sink();
    once.set_show_timestamp(false);
    twice.set_show_timestamp(false);

    once.set_min_severity(Severity::Warning);
    twice.set_min_severity(Severity::Warning);
    twice.set_min_severity(Severity::Warning);

    for level in Severity::ALL {
        once.log(level, "m");
        twice.log(level, "m");
    }

    assert_eq!(once_sink.contents(), twice_sink.contents());
    assert_eq!(once.config(), twice.config());
}

#[test]
fn standalone_loggers_do_not_share_settings() {
    let (a, _) = logger_with_sink();
    let (b, _) = logger_with_sink();
    a.set_min_severity(Severity::Error);
    assert_eq!(b.config().min_severity, Severity::Info);
}
