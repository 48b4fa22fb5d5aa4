// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output on stderr.
//!
//! Messages are prefixed with their severity and coloured only when stderr
//! is a terminal.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Severity::Error => "\x1b[31m",
            Severity::Warning => "\x1b[33m",
        }
    }
}

/// Print an error message to stderr.
pub fn print_error(msg: impl Display) {
    emit(Severity::Error, msg);
}

/// Print a warning message to stderr.
pub fn print_warning(msg: impl Display) {
    emit(Severity::Warning, msg);
}

fn emit(severity: Severity, msg: impl Display) {
    let stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    write_diagnostic(&mut stderr.lock(), severity, msg, is_tty);
}

fn write_diagnostic<W: Write>(
    writer: &mut W,
    severity: Severity,
    msg: impl Display,
    is_terminal: bool,
) {
    let _ = if is_terminal {
        writeln!(
            writer,
            "{}{}: {}\x1b[0m",
            severity.color(),
            severity.label(),
            msg
        )
    } else {
        writeln!(writer, "{}: {}", severity.label(), msg)
    };
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
