//! Error types and error handling for the verifier.
//!
//! This module defines the error types raised while verifying a source file:
//!
//! - A single `Error` carrying the failing line and its kind
//! - One `ErrorImpl` variant per kind of semantic or syntax failure
//! - `InputError` for problems with the input file itself
//! - Human readable names and suggestions used by the diagnostic printer

pub mod errors;

#[cfg(test)]
mod tests;
