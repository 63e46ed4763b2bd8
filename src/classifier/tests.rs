//! Unit tests for the line classifier.
//!
//! This module contains tests for line categorisation including:
//! - Each category's grammar
//! - Priority between overlapping grammars
//! - Skipped and illegal comment lines

use super::classifier::{is_skippable, Classifier, LineCategory};
use super::patterns::is_reserved;

fn classify(line: &str) -> LineCategory {
    Classifier::new().classify(line)
}

#[test]
fn test_classify_variable_declarations() {
    assert_eq!(classify("int a = 5;"), LineCategory::VariableDeclaration);
    assert_eq!(classify("final String s = \"hi\";"), LineCategory::VariableDeclaration);
    assert_eq!(classify("double x, y = 2.5;"), LineCategory::VariableDeclaration);
    assert_eq!(classify("char c;"), LineCategory::VariableDeclaration);
}

#[test]
fn test_classify_method_declaration() {
    assert_eq!(classify("void foo() {"), LineCategory::MethodDeclaration);
    assert_eq!(classify("void foo(int a, final String b){"), LineCategory::MethodDeclaration);
}

#[test]
fn test_classify_method_call() {
    assert_eq!(classify("foo();"), LineCategory::MethodCall);
    assert_eq!(classify("foo(1, \"two\", x);"), LineCategory::MethodCall);
}

#[test]
fn test_classify_conditional_blocks() {
    assert_eq!(classify("if (a && b) {"), LineCategory::ConditionalBlockStart);
    assert_eq!(classify("while(true){"), LineCategory::ConditionalBlockStart);
}

#[test]
fn test_classify_block_end_assignment_and_return() {
    assert_eq!(classify("}"), LineCategory::BlockEnd);
    assert_eq!(classify("a = 5;"), LineCategory::VariableAssignment);
    assert_eq!(classify("a = 5, b = c;"), LineCategory::VariableAssignment);
    assert_eq!(classify("return;"), LineCategory::ReturnStatement);
    assert_eq!(classify("return ;"), LineCategory::ReturnStatement);
}

#[test]
fn test_classify_comment_after_trimming_is_illegal() {
    assert_eq!(classify("// a comment"), LineCategory::IllegalComment);
}

#[test]
fn test_classify_unknown_lines() {
    assert_eq!(classify("int a = 5"), LineCategory::Unknown);
    assert_eq!(classify("a++;"), LineCategory::Unknown);
    assert_eq!(classify("return 5;"), LineCategory::Unknown);
    assert_eq!(classify("int foo() {"), LineCategory::Unknown);
    assert_eq!(classify("{"), LineCategory::Unknown);
}

#[test]
fn test_declaration_takes_priority_over_other_grammars() {
    assert_eq!(classify("int x = foo();"), LineCategory::VariableDeclaration);
}

#[test]
fn test_matches_single_grammar() {
    let classifier = Classifier::new();

    assert!(classifier.matches(LineCategory::MethodDeclaration, "void f() {"));
    assert!(classifier.matches(LineCategory::BlockEnd, "}"));
    assert!(!classifier.matches(LineCategory::VariableAssignment, "int a = 5;"));
    assert!(!classifier.matches(LineCategory::Unknown, "anything"));
}

#[test]
fn test_skippable_lines() {
    assert!(is_skippable(""));
    assert!(is_skippable("    "));
    assert!(is_skippable("\t"));
    assert!(is_skippable("// comment in column one"));
    assert!(!is_skippable("  // indented comment"));
    assert!(!is_skippable("int a;"));
}

#[test]
fn test_reserved_keywords() {
    for word in ["int", "double", "boolean", "char", "String", "void", "if", "while", "return", "final"] {
        assert!(is_reserved(word), "{} should be reserved", word);
    }
    assert!(!is_reserved("foo"));
    assert!(!is_reserved("true"));
}
