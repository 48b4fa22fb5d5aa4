// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run context merging CLI args, environment and config file.

use super::RuntimeError;
use crate::cli::{Cli, OutputFormat};
use crate::config::{validate_rule, Config};
use crate::env;
use crate::input::DEFAULT_INPUT;
use crate::safety::StepRule;
use std::path::PathBuf;

/// Settings for one run, with defaults applied.
///
/// Precedence: CLI args > environment > config file > defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunContext {
    pub input: PathBuf,
    pub rule: StepRule,
    pub output_format: OutputFormat,
    /// Print safe reports under each summary
    pub list: bool,
    pub verdict_log: Option<PathBuf>,
}

impl RunContext {
    /// Build the context for `cli`, loading the config file it points at.
    pub fn build(cli: &Cli) -> Result<Self, RuntimeError> {
        let config = match cli.config.clone().or_else(env::config) {
            Some(path) => Config::load(&path)?,
            None => Config::default(),
        };
        Self::merge(cli, config)
    }

    /// Merge `cli` over an already-loaded `config`.
    pub fn merge(cli: &Cli, config: Config) -> Result<Self, RuntimeError> {
        let input = cli
            .input
            .clone()
            .or_else(env::input)
            .or(config.input)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

        let rule = StepRule::new(
            cli.min_step.unwrap_or(config.rules.min_step),
            cli.max_step.unwrap_or(config.rules.max_step),
        );
        validate_rule(&rule)?;

        Ok(Self {
            input,
            rule,
            output_format: cli.output_format,
            list: cli.list,
            verdict_log: cli.verdict_log.clone().or_else(env::verdict_log),
        })
    }

    /// Context with defaults for everything but the input file
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            rule: StepRule::default(),
            output_format: OutputFormat::Text,
            list: false,
            verdict_log: None,
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
