//! Line classification module for the verifier.
//!
//! Every statement, block opener and block closer in the language occupies
//! exactly one line, so instead of a token stream the verifier works on
//! whole lines. This module:
//!
//! - Holds the fixed line grammars and literal patterns
//! - Holds the reserved keyword table
//! - Maps a trimmed line to a `LineCategory`, first match wins
//! - Detects blank lines and column-one comments that are skipped entirely

pub mod classifier;
pub mod patterns;

#[cfg(test)]
mod tests;
