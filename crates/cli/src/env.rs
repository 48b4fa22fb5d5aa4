// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! Every environment variable levelcheck reads is named here. Use these
//! accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

pub use names::*;

use std::path::PathBuf;

/// `LEVELCHECK_INPUT` — input file used when no path is given on the command line.
pub fn input() -> Option<PathBuf> {
    var_path(names::LEVELCHECK_INPUT)
}

/// `LEVELCHECK_CONFIG` — TOML config file used when `--config` is absent.
pub fn config() -> Option<PathBuf> {
    var_path(names::LEVELCHECK_CONFIG)
}

/// `LEVELCHECK_VERDICT_LOG` — JSONL verdict log destination.
pub fn verdict_log() -> Option<PathBuf> {
    var_path(names::LEVELCHECK_VERDICT_LOG)
}

/// Read a path-valued variable. Unset and empty are both treated as absent.
fn var_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
