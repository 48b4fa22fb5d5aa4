// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Summary output in text and JSON form.

use crate::classify::Classification;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::Path;

/// Result of one classifier pass, as reported
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassSummary {
    pub safe: usize,
    /// Input line numbers of the safe reports
    pub lines: Vec<usize>,
}

impl From<&Classification<'_>> for PassSummary {
    fn from(classification: &Classification<'_>) -> Self {
        Self {
            safe: classification.count(),
            lines: classification.lines(),
        }
    }
}

/// Machine-readable result of a whole run (`--output-format json`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub input: String,
    /// Reports that parsed
    pub reports: usize,
    /// Lines rejected for invalid levels
    pub rejected: usize,
    pub direct: PassSummary,
    pub dampened: PassSummary,
}

impl RunSummary {
    pub fn new(
        input: &Path,
        reports: usize,
        rejected: usize,
        direct: &Classification<'_>,
        dampened: &Classification<'_>,
    ) -> Self {
        Self {
            input: input.display().to_string(),
            reports,
            rejected,
            direct: direct.into(),
            dampened: dampened.into(),
        }
    }
}

/// Write one summary line per pass, each optionally followed by its safe reports.
pub fn write_text<W: Write>(
    writer: &mut W,
    passes: &[&Classification<'_>],
    list: bool,
) -> io::Result<()> {
    for pass in passes {
        writeln!(writer, "{}", pass.summary())?;
        if list {
            for report in pass.safe() {
                writeln!(writer, "  {}", report.text())?;
            }
        }
    }
    Ok(())
}

/// Write `summary` as a single JSON line.
pub fn write_json<W: Write>(writer: &mut W, summary: &RunSummary) -> io::Result<()> {
    serde_json::to_writer(&mut *writer, summary)?;
    writeln!(writer)
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
