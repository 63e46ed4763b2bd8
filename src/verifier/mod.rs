//! Two-pass verification driver.
//!
//! `verifier::verify` is the engine's entry point: it takes the lines of one
//! source file and returns `Ok(())` for a legal program or the first error.

pub mod handlers;
pub mod lookups;
pub mod verifier;
