//! # ChatRS CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` to use them.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// An `assert_cmd::Command` for the compiled `chatrs` binary.
///
/// ## Panics
/// Panics if the `chatrs` binary cannot be found via `Command::cargo_bin`.
pub fn chatrs_cmd() -> Command {
    Command::cargo_bin("chatrs").expect("Failed to find chatrs binary for testing")
}

/// A `chatrs` command that cannot pick up configuration from the machine it
/// runs on: the working directory and home/config directories all point into
/// `sandbox`, and `CHATRS_*` variables are cleared.
pub fn isolated_cmd(sandbox: &Path) -> Command {
    let mut cmd = chatrs_cmd();
    cmd.current_dir(sandbox)
        .env("HOME", sandbox)
        .env("XDG_CONFIG_HOME", sandbox.join(".config"))
        .env_remove("CHATRS_CONFIG")
        .env_remove("CHATRS_RULES")
        .env_remove("CHATRS_SEED")
        .env_remove("RUST_LOG");
    cmd
}

/// Creates an empty sandbox directory marked as a repository root, so the
/// project config search stops there.
pub fn sandbox() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create sandbox dir");
    std::fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
    dir
}

/// Writes `content` to `name` inside `dir` and returns the full path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}
