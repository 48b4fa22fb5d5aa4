// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Check level reports for safe monotonic steps
#[derive(Parser, Clone, Debug)]
#[command(name = "levelcheck", version, about = "Check level reports for safe monotonic steps")]
pub struct Cli {
    /// Report file, one report per line (default: unusual-data.txt)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// TOML config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Smallest allowed step between adjacent levels
    #[arg(long, value_name = "N")]
    pub min_step: Option<u64>,

    /// Largest allowed step between adjacent levels
    #[arg(long, value_name = "N")]
    pub max_step: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// List every safe report under its summary line
    #[arg(long)]
    pub list: bool,

    /// Write one JSON verdict per report and mode to FILE
    #[arg(long, value_name = "FILE")]
    pub verdict_log: Option<PathBuf>,
}

/// Output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
