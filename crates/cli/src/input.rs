// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input file reading.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default input file, resolved against the working directory
pub const DEFAULT_INPUT: &str = "unusual-data.txt";

#[derive(Debug, Error)]
#[error("Error reading file {}: {source}", path.display())]
pub struct InputError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Non-blank lines of `content` with their 1-based line numbers.
///
/// Accepts both `\n` and `\r\n` endings.
pub fn numbered_lines(content: &str) -> Vec<(usize, &str)> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| (i + 1, line))
        .collect()
}

/// Read `path` fully into memory.
pub fn read_input(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
