// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verdict recording for levelcheck runs.
//!
//! Every report a run classifies produces one entry per mode. The log can
//! stay in memory for assertions or stream JSONL to a file for later
//! inspection.

mod duration_serde;
mod log;
mod verdict;

pub use log::VerdictLog;
pub use verdict::{CheckMode, VerdictEntry, VerdictOutcome};
