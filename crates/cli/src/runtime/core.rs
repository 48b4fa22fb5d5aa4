// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The check pipeline.

use super::{RunContext, RuntimeError};
use crate::audit::{CheckMode, VerdictLog, VerdictOutcome};
use crate::classify::Classifier;
use crate::cli::OutputFormat;
use crate::input::{numbered_lines, read_input};
use crate::output::{write_json, write_text, RunSummary};
use crate::output_diagnostic::{print_error, print_warning};
use crate::report::parse_numbered;
use std::io::Write;
use std::path::Path;

/// Run both classifier passes over the context's input and write the result.
///
/// A read failure on the input is printed and treated as an empty file.
/// Lines with invalid levels are warned about and left out of both passes.
/// A verdict log that cannot be fully written fails the run before any
/// summary is printed.
pub fn run<W: Write>(ctx: &RunContext, out: &mut W) -> Result<RunSummary, RuntimeError> {
    let verdict_log_error = |path: &Path, source| RuntimeError::VerdictLog {
        path: path.to_path_buf(),
        source,
    };
    let log = ctx
        .verdict_log
        .as_deref()
        .map(|path| VerdictLog::with_file(path).map_err(|e| verdict_log_error(path, e)))
        .transpose()?;

    let content = read_input(&ctx.input).unwrap_or_else(|e| {
        print_error(&e);
        String::new()
    });

    let parsed = parse_numbered(numbered_lines(&content));
    for rejected in &parsed.rejected {
        print_warning(rejected);
        if let Some(log) = &log {
            log.record(
                CheckMode::Parse,
                rejected.line(),
                &[],
                VerdictOutcome::Rejected {
                    token: rejected.token().to_string(),
                },
            );
        }
    }

    let mut classifier = Classifier::new(ctx.rule);
    if let Some(log) = &log {
        classifier = classifier.with_log(log);
    }
    let direct = classifier.run(&parsed.reports, CheckMode::Direct);
    let dampened = classifier.run(&parsed.reports, CheckMode::Dampened);

    if let (Some(log), Some(path)) = (&log, ctx.verdict_log.as_deref()) {
        log.finish().map_err(|e| verdict_log_error(path, e))?;
    }

    let summary = RunSummary::new(
        &ctx.input,
        parsed.reports.len(),
        parsed.rejected.len(),
        &direct,
        &dampened,
    );
    match ctx.output_format {
        OutputFormat::Text => write_text(out, &[&direct, &dampened], ctx.list)?,
        OutputFormat::Json => write_json(out, &summary)?,
    }

    Ok(summary)
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
