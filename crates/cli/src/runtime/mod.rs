// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime module for orchestrating a check run.
//!
//! - [`RunContext`] - Merged settings from CLI, environment and config file
//! - [`run`] - Read, parse, classify and report

mod context;
mod core;

pub use context::RunContext;
pub use core::run;

use crate::config::ConfigError;
use std::path::PathBuf;

/// Errors that abort a run.
///
/// An unreadable input file is not one of them: it is reported and the run
/// continues with no reports.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("Failed to write verdict log {}: {source}", path.display())]
    VerdictLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
