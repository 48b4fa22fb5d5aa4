// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

//! Shared helpers for binary-level tests.

use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

/// Sample reports with two directly safe and four dampened-safe lines.
pub const SAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

/// Create a temporary input file
pub fn write_input(content: &str) -> NamedTempFile {
    write_with_suffix(content, ".txt")
}

/// Create a temporary TOML config file
pub fn write_config(content: &str) -> NamedTempFile {
    write_with_suffix(content, ".toml")
}

fn write_with_suffix(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// The levelcheck binary with levelcheck env vars cleared
pub fn levelcheck() -> Command {
    let mut cmd = Command::cargo_bin("levelcheck").unwrap();
    cmd.env_remove("LEVELCHECK_INPUT")
        .env_remove("LEVELCHECK_CONFIG")
        .env_remove("LEVELCHECK_VERDICT_LOG");
    cmd
}
