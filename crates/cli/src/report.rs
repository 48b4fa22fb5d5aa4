// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report parsing.
//!
//! A report is one non-blank input line: whitespace-separated base-10
//! integers called levels.

use thiserror::Error;

/// One integer reading within a report
pub type Level = i64;

/// A line that could not be turned into a report
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: invalid level '{token}'")]
    InvalidLevel { line: usize, token: String },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::InvalidLevel { line, .. } => *line,
        }
    }

    /// The offending token
    pub fn token(&self) -> &str {
        match self {
            ParseError::InvalidLevel { token, .. } => token,
        }
    }
}

/// A parsed report
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    line: usize,
    text: String,
    levels: Vec<Level>,
}

impl Report {
    /// Parse `text` as the report found on 1-based `line`.
    pub fn parse(line: usize, text: &str) -> Result<Self, ParseError> {
        let levels = text
            .split_whitespace()
            .map(|token| {
                token.parse::<Level>().map_err(|_| ParseError::InvalidLevel {
                    line,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            line,
            text: text.trim().to_string(),
            levels,
        })
    }

    /// Build a report directly from levels, rendering the text from them.
    pub fn from_levels(line: usize, levels: Vec<Level>) -> Self {
        let text = levels
            .iter()
            .map(Level::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        Self { line, text, levels }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// The source text, trimmed
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Reports and rejected lines from one input
#[derive(Clone, Debug, Default)]
pub struct ParsedInput {
    pub reports: Vec<Report>,
    pub rejected: Vec<ParseError>,
}

/// Parse lines numbered by position, starting at 1.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> ParsedInput {
    parse_numbered(
        lines
            .iter()
            .enumerate()
            .map(|(i, text)| (i + 1, text.as_ref())),
    )
}

/// Parse `(line, text)` pairs, splitting good reports from rejected lines.
pub fn parse_numbered<'a, I>(lines: I) -> ParsedInput
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    let mut parsed = ParsedInput::default();
    for (line, text) in lines {
        match Report::parse(line, text) {
            Ok(report) => parsed.reports.push(report),
            Err(e) => parsed.rejected.push(e),
        }
    }
    parsed
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
