//! Symbol tables and scope tracking for the verifier.
//!
//! This module holds everything the validators query and update:
//!
//! - The primitive types and the widening rules between them
//! - Variable records, parameters and method signatures
//! - Lexical scopes, each with an initialized and an uninitialized table
//! - The verification `Context`, owning the scope stack and method table
//!
//! The context is owned by a single verification run and every validator
//! call is an exclusive, single-threaded update of it.

pub mod context;
pub mod scope;
pub mod symbols;
pub mod types;
