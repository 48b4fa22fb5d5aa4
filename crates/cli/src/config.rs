// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! TOML configuration file.
//!
//! ```toml
//! input = "unusual-data.txt"
//!
//! [rules]
//! min_step = 1
//! max_step = 3
//! ```

use crate::safety::StepRule;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid step bounds: {0}")]
    Validation(String),
}

/// Top-level configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Input file, relative to the working directory
    #[serde(default)]
    pub input: Option<PathBuf>,

    #[serde(default)]
    pub rules: StepRule,
}

impl Config {
    /// Load a config file.
    ///
    /// Step bounds are not validated here: CLI flags may still override
    /// either one, so only the merged rule is checked.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = content.parse()?;
        Ok(config)
    }
}

impl std::str::FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// Reject bounds that no step could ever satisfy, or that would admit a flat step.
pub fn validate_rule(rule: &StepRule) -> Result<(), ConfigError> {
    if rule.min_step == 0 {
        return Err(ConfigError::Validation(
            "min_step must be at least 1".to_string(),
        ));
    }
    if rule.max_step < rule.min_step {
        return Err(ConfigError::Validation(format!(
            "max_step {} is below min_step {}",
            rule.max_step, rule.min_step
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
