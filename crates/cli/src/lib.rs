// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Level report checker.
//!
//! Reads reports (lines of whitespace-separated integer levels) and counts
//! the safe ones twice: once with the plain monotonic bounded-step rule and
//! once allowing a single level to be dropped.
//!
//! ```
//! use levelcheck::classify::{classify_all, classify_all_with_tolerance};
//! use levelcheck::report::parse_lines;
//! use levelcheck::safety::StepRule;
//!
//! let parsed = parse_lines(&["7 6 4 2 1", "1 3 2 4 5", "1 1 1 1 1"]);
//! let rule = StepRule::default();
//!
//! assert_eq!(classify_all(&parsed.reports, &rule).count(), 1);
//! assert_eq!(classify_all_with_tolerance(&parsed.reports, &rule).count(), 2);
//! ```

/// Re-exported verdict log types from the levelcheck-audit crate.
pub mod audit {
    pub use levelcheck_audit::{CheckMode, VerdictEntry, VerdictLog, VerdictOutcome};
}
pub mod classify;
pub mod cli;
pub mod config;
pub mod env;
pub mod input;
pub mod output;
pub mod output_diagnostic;
pub mod report;
pub mod runtime;
pub mod safety;
