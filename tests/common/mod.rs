//! Common utilities for integration tests

use assert_cmd::Command;
use std::path::PathBuf;

/// Get the path to the `taskboard` binary
///
/// Checks the `CARGO_BIN_EXE_taskboard` environment variable first (set by
/// cargo when using custom target directories), falling back to the standard
/// cargo build directory.
#[allow(dead_code)]
#[allow(deprecated)] // cargo_bin() is deprecated but needed for fallback
pub fn taskboard_binary() -> PathBuf {
    std::env::var("CARGO_BIN_EXE_taskboard")
        .map(PathBuf::from)
        .unwrap_or_else(|_| assert_cmd::cargo::cargo_bin("taskboard"))
}

/// Create a Command for `taskboard`
#[allow(dead_code)]
pub fn taskboard_command() -> Command {
    Command::new(taskboard_binary())
}
