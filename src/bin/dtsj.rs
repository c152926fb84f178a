#![allow(clippy::print_stderr)]

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;

use dtsj::cli::args::CliArgs;
use dtsj::cli::driver;
use dtsj::cli::reporter::Reporter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_DIAGNOSTICS: i32 = 1;

fn main() -> Result<()> {
    // Initialize tracing if DTSJ_LOG or RUST_LOG is set (zero cost otherwise).
    dtsj::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    let result = driver::run(&args, &cwd)?;

    let color = std::io::stderr().is_terminal();
    let mut reporter = Reporter::new(color);
    for file in &result.files {
        reporter.add_source(&file.path.display().to_string(), &file.source);
    }
    for file in &result.files {
        if !file.diagnostics.is_empty() {
            eprintln!("{}", reporter.render(&file.diagnostics));
        }
    }

    let error_count = result.error_count();
    if error_count > 0 {
        eprintln!(
            "\nFound {error_count} error{} in {} file{}.",
            if error_count == 1 { "" } else { "s" },
            result.files.len(),
            if result.files.len() == 1 { "" } else { "s" },
        );
        std::process::exit(EXIT_DIAGNOSTICS);
    }

    std::process::exit(EXIT_SUCCESS);
}
