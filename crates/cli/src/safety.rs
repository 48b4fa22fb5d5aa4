// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The monotonic bounded-step safety predicate.
//!
//! A report is safe when its levels move in one direction only and every
//! step between neighbours stays within the configured bounds. Reports
//! with fewer than two levels are vacuously safe.

use crate::report::Level;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Smallest allowed step between adjacent levels
pub const DEFAULT_MIN_STEP: u64 = 1;
/// Largest allowed step between adjacent levels
pub const DEFAULT_MAX_STEP: u64 = 3;

/// Inclusive bounds on the absolute step between adjacent levels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StepRule {
    pub min_step: u64,
    pub max_step: u64,
}

impl StepRule {
    pub fn new(min_step: u64, max_step: u64) -> Self {
        Self { min_step, max_step }
    }

    fn allows(&self, magnitude: u128) -> bool {
        (u128::from(self.min_step)..=u128::from(self.max_step)).contains(&magnitude)
    }
}

impl Default for StepRule {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_STEP, DEFAULT_MAX_STEP)
    }
}

/// Direction fixed by the first non-zero step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Increasing,
    Decreasing,
}

impl Trend {
    fn of(diff: i128) -> Self {
        if diff > 0 {
            Trend::Increasing
        } else {
            Trend::Decreasing
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
        })
    }
}

/// First rule violation found in a report.
///
/// `index` is the position of the left level of the offending pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("flat step at index {index}")]
    FlatStep { index: usize },

    #[error("step of {diff} at index {index} is outside {min}..={max}")]
    StepOutOfRange {
        index: usize,
        diff: i128,
        min: u64,
        max: u64,
    },

    #[error("step of {diff} at index {index} breaks {trend} trend")]
    TrendReversal {
        index: usize,
        diff: i128,
        trend: Trend,
    },
}

impl Violation {
    pub fn index(&self) -> usize {
        match self {
            Violation::FlatStep { index }
            | Violation::StepOutOfRange { index, .. }
            | Violation::TrendReversal { index, .. } => *index,
        }
    }
}

/// Check `levels` against `rule`.
///
/// Returns the trend on success, `None` when there are fewer than two
/// levels. A zero step fails regardless of whether a trend has been fixed.
pub fn check(levels: &[Level], rule: &StepRule) -> Result<Option<Trend>, Violation> {
    let mut trend = None;

    for (index, pair) in levels.windows(2).enumerate() {
        let diff = i128::from(pair[1]) - i128::from(pair[0]);
        if diff == 0 {
            return Err(Violation::FlatStep { index });
        }

        let fixed = *trend.get_or_insert_with(|| Trend::of(diff));
        if !rule.allows(diff.unsigned_abs()) {
            return Err(Violation::StepOutOfRange {
                index,
                diff,
                min: rule.min_step,
                max: rule.max_step,
            });
        }
        if Trend::of(diff) != fixed {
            return Err(Violation::TrendReversal {
                index,
                diff,
                trend: fixed,
            });
        }
    }

    Ok(trend)
}

/// Whether `levels` satisfy `rule`.
pub fn is_safe(levels: &[Level], rule: &StepRule) -> bool {
    check(levels, rule).is_ok()
}

#[cfg(test)]
#[path = "safety_tests.rs"]
mod tests;
