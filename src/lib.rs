#![allow(clippy::module_inception)]

use std::{
    fs,
    io,
    path::Path,
};

use colored::Colorize;

use crate::{
    errors::errors::{Error, ErrorTip, InputError},
    verifier::verifier::verify_source,
};

pub mod classifier;
pub mod context;
pub mod errors;
pub mod macros;
pub mod validator;
pub mod verifier;

extern crate regex;

pub const SOURCE_EXTENSION: &str = "sjava";

/// A 1-based source line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub u32);

/// Checks that `path` names an existing `.sjava` file.
pub fn validate_source_path(path: &Path) -> Result<(), InputError> {
    if path.extension().and_then(|extension| extension.to_str()) != Some(SOURCE_EXTENSION) {
        return Err(InputError::InvalidExtension {
            path: path.to_path_buf(),
            expected: SOURCE_EXTENSION,
        });
    }

    let metadata = fs::metadata(path).map_err(|source| InputError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    if !metadata.is_file() {
        return Err(InputError::Unreadable {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        });
    }

    Ok(())
}

pub fn read_source(path: &Path) -> Result<String, InputError> {
    validate_source_path(path)?;

    fs::read_to_string(path).map_err(|source| InputError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Verifies the program stored at `path`.
///
/// The outer result fails when the file cannot be used at all; the inner one
/// carries the verification outcome.
pub fn verify_file(path: &Path) -> Result<Result<(), Error>, InputError> {
    let source = read_source(path)?;
    Ok(verify_source(&source))
}

/// The text of line `line_number` (1-based), without its line terminator.
pub fn get_line(content: &str, line_number: u32) -> Option<&str> {
    if line_number == 0 {
        return None;
    }

    content.lines().nth(line_number as usize - 1)
}


pub fn display_error(error: &Error, file: &Path) {
    /*
        Error: FinalReassignment (Variable `x` is final and cannot be reassigned)
        -> program.sjava
           |
        20 | x = 5;
           | ^^^^^^
    */

    let content = fs::read_to_string(file).unwrap_or_default();
    let line = error.get_line();
    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("{}: {}", "Error".red().bold(), error.get_error_name().bold());
    } else {
        println!("{}: {} ({})", "Error".red().bold(), error.get_error_name().bold(), error.get_tip());
    }
    println!("{} {}", "->".blue(), file.as_os_str().to_string_lossy());
    println!("{:>padding$}", "|".blue());

    match get_line(&content, line) {
        Some(line_text) => {
            let line_text = line_text.trim();
            println!("{} {} {}", line_string.blue(), "|".blue(), line_text);
            println!("{:>padding$} {}", "|".blue(), "^".repeat(line_text.len().max(1)).red());
        }
        None => {
            println!("{} {} {}", line_string.blue(), "|".blue(), "<end of file>".dimmed());
        }
    }

    println!("{}", error.to_string().dimmed());
}
