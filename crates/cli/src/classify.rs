// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Direct and dampened report classification.

use crate::audit::{CheckMode, VerdictLog, VerdictOutcome};
use crate::report::Report;
use crate::safety::{check, is_safe, StepRule};

/// How a single report fared
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assessment {
    Safe,
    /// Safe once the level at this index is removed
    SafeAfterRemoval(usize),
    Unsafe,
}

impl Assessment {
    pub fn is_safe(&self) -> bool {
        !matches!(self, Assessment::Unsafe)
    }
}

/// First index whose removal turns an unsafe sequence safe.
///
/// Indices are tried in ascending order. Returns `None` when the sequence
/// is already safe or no single removal helps.
pub fn dampened_removal(levels: &[i64], rule: &StepRule) -> Option<usize> {
    if is_safe(levels, rule) {
        return None;
    }

    let mut candidate = Vec::with_capacity(levels.len().saturating_sub(1));
    (0..levels.len()).find(|&skip| {
        candidate.clear();
        candidate.extend_from_slice(&levels[..skip]);
        candidate.extend_from_slice(&levels[skip + 1..]);
        is_safe(&candidate, rule)
    })
}

/// Assess one report under `mode`.
///
/// `CheckMode::Parse` never reaches here and is treated as direct.
pub fn assess(report: &Report, rule: &StepRule, mode: CheckMode) -> Assessment {
    if is_safe(report.levels(), rule) {
        return Assessment::Safe;
    }
    match mode {
        CheckMode::Dampened => dampened_removal(report.levels(), rule)
            .map_or(Assessment::Unsafe, Assessment::SafeAfterRemoval),
        CheckMode::Direct | CheckMode::Parse => Assessment::Unsafe,
    }
}

/// Safe reports found by one classifier pass
#[derive(Clone, Debug)]
pub struct Classification<'a> {
    mode: CheckMode,
    safe: Vec<&'a Report>,
}

impl<'a> Classification<'a> {
    pub fn mode(&self) -> CheckMode {
        self.mode
    }

    /// Safe reports, in input order
    pub fn safe(&self) -> &[&'a Report] {
        &self.safe
    }

    pub fn count(&self) -> usize {
        self.safe.len()
    }

    /// Line numbers of the safe reports
    pub fn lines(&self) -> Vec<usize> {
        self.safe.iter().map(|r| r.line()).collect()
    }

    /// Human-readable one-line summary
    pub fn summary(&self) -> String {
        match (self.count(), self.mode) {
            (0, _) => "No safe reports found!".to_string(),
            (n, CheckMode::Dampened) => format!("Found {} safe reports with Problem Dampener", n),
            (n, _) => format!("Found {} safe reports", n),
        }
    }
}

/// Runs a classifier pass, optionally recording every verdict
pub struct Classifier<'log> {
    rule: StepRule,
    log: Option<&'log VerdictLog>,
}

impl<'log> Classifier<'log> {
    pub fn new(rule: StepRule) -> Self {
        Self { rule, log: None }
    }

    /// Record each verdict into `log`
    pub fn with_log(mut self, log: &'log VerdictLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Classify every report under `mode`
    pub fn run<'a>(&self, reports: &'a [Report], mode: CheckMode) -> Classification<'a> {
        let safe = reports
            .iter()
            .filter(|report| {
                let assessment = assess(report, &self.rule, mode);
                if let Some(log) = self.log {
                    log.record(
                        mode,
                        report.line(),
                        report.levels(),
                        self.outcome(report, assessment),
                    );
                }
                assessment.is_safe()
            })
            .collect();

        Classification { mode, safe }
    }

    fn outcome(&self, report: &Report, assessment: Assessment) -> VerdictOutcome {
        match assessment {
            Assessment::Safe => VerdictOutcome::Safe,
            Assessment::SafeAfterRemoval(index) => VerdictOutcome::SafeAfterRemoval {
                index,
                level: report.levels()[index],
            },
            Assessment::Unsafe => VerdictOutcome::Unsafe {
                reason: check(report.levels(), &self.rule)
                    .err()
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
            },
        }
    }
}

/// Apply the safety predicate to every report.
pub fn classify_all<'a>(reports: &'a [Report], rule: &StepRule) -> Classification<'a> {
    Classifier::new(*rule).run(reports, CheckMode::Direct)
}

/// Apply the predicate with single-level removal tolerance to every report.
pub fn classify_all_with_tolerance<'a>(
    reports: &'a [Report],
    rule: &StepRule,
) -> Classification<'a> {
    Classifier::new(*rule).run(reports, CheckMode::Dampened)
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
