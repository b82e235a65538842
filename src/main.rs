use std::process::ExitCode;

use clap::Parser;

use tintlog::cli::Cli;
use tintlog::config::Config;
use tintlog::{Logger, Severity};

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so `tintlog | head` ends quietly
    // instead of the logger writing into a closed pipe.
    reset_sigpipe();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    let logger = Logger::instance();
    logger.set_min_severity(config.min_severity);
    logger.set_show_timestamp(config.show_timestamp);
    logger.set_show_severity_tag(config.show_severity_tag);

    if cli.messages.is_empty() {
        logger.log(Severity::Debug, "Debug message");
        logger.log(Severity::Info, "Info message");
        logger.log(Severity::Warning, "Warning message");
        logger.log(Severity::Error, "Error message");
        return ExitCode::SUCCESS;
    }

    for message in &cli.messages {
        if let Err(e) = logger.try_log(cli.severity, message) {
            eprintln!("tintlog: write error: {e}");
            return ExitCode::from(2);
        }
    }

    ExitCode::SUCCESS
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// Restoring `SIG_DFL` lets the OS end the process when the reader of
/// stdout goes away.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
