// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! levelcheck binary entry point.

use clap::Parser;

use levelcheck::cli::Cli;
use levelcheck::output_diagnostic::print_error;
use levelcheck::runtime::{run, RunContext};

fn main() {
    let cli = Cli::parse();

    let ctx = match RunContext::build(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            print_error(e);
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    if let Err(e) = run(&ctx, &mut stdout.lock()) {
        print_error(e);
        std::process::exit(1);
    }
}
