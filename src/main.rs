//! sjavac: static verifier for s-Java source files.
//!
//! Usage:
//!   sjavac [OPTIONS] <SOURCE>
//!
//! Prints `0` for a legal program, `1` for an illegal one and `2` when the
//! source file cannot be used, and exits with the same status.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use colored::Colorize;

use sjavac::{display_error, verify_file};

const EXIT_LEGAL: u8 = 0;
const EXIT_ILLEGAL: u8 = 1;
const EXIT_INPUT_ERROR: u8 = 2;

/// s-Java verifier
///
/// Checks an s-Java program for syntax and semantic errors without running it.
#[derive(Parser, Debug)]
#[command(name = "sjavac")]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file, must end in .sjava
    #[arg(value_name = "SOURCE")]
    source: PathBuf,

    /// Disable colored diagnostics
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let status = match verify_file(&args.source) {
        Ok(Ok(())) => EXIT_LEGAL,
        Ok(Err(error)) => {
            display_error(&error, &args.source);
            EXIT_ILLEGAL
        }
        Err(error) => {
            eprintln!("{}: {}", "Error".red().bold(), error);
            EXIT_INPUT_ERROR
        }
    };

    println!("{}", status);
    ExitCode::from(status)
}
