//! Per-construct validators.
//!
//! Each validator handles one line category. It re-matches the line against
//! its own grammar to pull out the parts it needs, checks them against the
//! `Context`, and on success updates the context (declaring variables,
//! registering methods, entering scopes). The first failure is returned as an
//! `Error` carrying the line number; nothing is recovered locally.

pub mod condition;
pub mod declaration;
pub mod method_call;
pub mod method_declaration;
pub mod return_statement;
pub mod values;
