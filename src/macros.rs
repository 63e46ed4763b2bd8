//! Utility macros for the verifier.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_ERROR!` - Creates an Error instance for a source line
//! - `MK_PATTERN!` - Compiles one of the fixed line grammars
//!
//! These macros reduce boilerplate in the validators.

/// Creates an Error instance tagged with a 1-based line number.
///
/// # Arguments
///
/// * `$kind` - The ErrorImpl variant
/// * `$line` - The line number the failure is reported on
///
/// # Example
///
/// ```ignore
/// return Err(MK_ERROR!(ErrorImpl::ReturnOutsideMethod, line_number));
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($kind:expr, $line:expr) => {
        $crate::errors::errors::Error::new($kind, $crate::Position($line))
    };
}

/// Compiles a regex from a grammar that is fixed at build time.
///
/// The patterns passed here are string literals owned by the crate, so a
/// failure to compile is a programming error rather than an input error.
///
/// # Example
///
/// ```ignore
/// static ref BLOCK_END: Regex = MK_PATTERN!(r"^\s*\}\s*$");
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($pattern:expr) => {
        regex::Regex::new($pattern).unwrap()
    };
}
