//! Integration tests for the `tintlog` demo binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn tintlog() -> Command {
    Command::cargo_bin("tintlog").unwrap()
}

#[test]
fn default_run_prints_one_line_per_severity() {
    let output = tintlog().output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(stdout.lines().count(), 4);
    assert!(stdout.contains("\x1b[34m"));
    assert!(stdout.contains("[DEBUG] Debug message"));
    assert!(stdout.contains("[INFO] Info message"));
    assert!(stdout.contains("[WARNING] Warning message"));
    assert!(stdout.contains("[ERROR] Error message"));
}

#[test]
fn colors_emitted_even_when_piped() {
    tintlog()
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[31m"))
        .stdout(predicate::str::contains("\x1b[0m"));
}

#[test]
fn level_flag_filters() {
    let output = tintlog().arg("--level=warning").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!stdout.contains("Debug message"));
    assert!(!stdout.contains("Info message"));
    assert!(stdout.contains("Warning message"));
    assert!(stdout.contains("Error message"));
}

#[test]
fn level_flag_case_insensitive() {
    let output = tintlog().arg("--level=ERROR").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("Error message"));
}

#[test]
fn bare_messages_at_chosen_severity() {
    tintlog()
        .args(["--no-timestamp", "--no-level", "-s", "warn", "one", "two"])
        .assert()
        .success()
        .stdout("\x1b[33mone\x1b[0m\n\x1b[33mtwo\x1b[0m\n");
}

#[test]
fn messages_below_threshold_are_dropped() {
    tintlog()
        .args(["--level", "error", "--severity", "info", "quiet"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn invalid_level_is_rejected() {
    tintlog()
        .arg("--level=verbose")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid level"));
}
