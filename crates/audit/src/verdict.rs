// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verdict record types.

use super::duration_serde;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, SystemTime};

/// Which pass produced a verdict
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckMode {
    /// Line could not be parsed into a report
    Parse,
    /// Plain safety predicate
    Direct,
    /// Predicate with single-level removal tolerance
    Dampened,
}

impl fmt::Display for CheckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CheckMode::Parse => "parse",
            CheckMode::Direct => "direct",
            CheckMode::Dampened => "dampened",
        })
    }
}

/// One recorded verdict
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerdictEntry {
    /// Sequence number within the log
    pub seq: u64,

    /// Wall-clock timestamp
    pub timestamp: SystemTime,

    /// Elapsed time since the log was created
    #[serde(with = "duration_serde")]
    pub elapsed: Duration,

    pub mode: CheckMode,

    /// 1-based line number in the input file
    pub line: usize,

    /// Parsed levels (empty for rejected lines)
    pub levels: Vec<i64>,

    pub outcome: VerdictOutcome,
}

/// Outcome of checking one report
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VerdictOutcome {
    Safe,
    /// Safe once the level at `index` is dropped
    SafeAfterRemoval { index: usize, level: i64 },
    Unsafe { reason: String },
    Rejected { token: String },
}

impl VerdictOutcome {
    /// Whether the report counts as safe
    pub fn is_safe(&self) -> bool {
        matches!(
            self,
            VerdictOutcome::Safe | VerdictOutcome::SafeAfterRemoval { .. }
        )
    }
}

#[cfg(test)]
#[path = "verdict_tests.rs"]
mod tests;
