//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnknownType {
            type_: "float".to_string(),
        },
        Position(10),
    );

    assert_eq!(error.get_error_name(), "UnknownType");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::VariableNotDeclared {
            variable: "x".to_string(),
        },
        Position(42),
    );

    assert_eq!(error.get_line(), 42);
    assert_eq!(error, Error::new(ErrorImpl::VariableNotDeclared { variable: "x".to_string() }, Position(42)));
}

#[test]
fn test_error_kind() {
    let error = Error::new(ErrorImpl::ReturnOutsideMethod, Position(3));

    assert!(matches!(error.get_kind(), ErrorImpl::ReturnOutsideMethod));
}

#[test]
fn test_type_incompatible_error() {
    let error = Error::new(
        ErrorImpl::TypeIncompatible {
            expected: "int".to_string(),
            received: "String".to_string(),
        },
        Position(1),
    );

    assert_eq!(error.get_error_name(), "TypeIncompatible");
    assert_eq!(error.get_tip().to_string(), "Expected type `int`, received `String`");
}

#[test]
fn test_arity_error_reports_both_counts() {
    let error = Error::new(
        ErrorImpl::MethodArityMismatch {
            method: "foo".to_string(),
            expected: 2,
            received: 3,
        },
        Position(7),
    );

    let message = error.to_string();
    assert!(message.starts_with("Line 7 - "));
    assert!(message.contains("expected 2"));
    assert!(message.contains("received 3"));
}

#[test]
fn test_unclosed_scope_error() {
    let error = Error::new(ErrorImpl::UnclosedScope, Position(12));

    assert_eq!(error.get_error_name(), "UnclosedScope");
    assert_eq!(error.to_string(), "Line 12 - all scopes must be closed");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::UnmatchedBlockEnd, Position(0));

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::FinalReassignment {
            variable: "x".to_string(),
        },
        Position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_errors_compare_by_kind_and_line() {
    let a = Error::new(ErrorImpl::IllegalComment, Position(4));
    let b = Error::new(ErrorImpl::IllegalComment, Position(4));
    let c = Error::new(ErrorImpl::IllegalComment, Position(5));

    assert_eq!(a, b);
    assert_ne!(a, c);
}
