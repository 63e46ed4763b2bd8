//! Integration tests for end-to-end verification.
//!
//! These tests run whole s-Java programs through both passes and check the
//! verdict, the kind of the first error and the line it is reported on.

use std::io::Write;

use sjavac::{
    errors::errors::ErrorImpl,
    verifier::verifier::{verify, verify_source},
    verify_file,
};

fn first_error(source: &str) -> (String, u32) {
    let error = verify_source(source).expect_err("program should be rejected");
    (error.get_error_name().to_string(), error.get_line())
}

const LEGAL_PROGRAM: &str = r#"// Globals may be used by every method.
final int LIMIT = 10;
double ratio = 0.5;
String greeting;

void main(int count, final String name) {
    greeting = name;
    boolean running = true;
    int i = 0, j;
    j = count;

    while (running && i) {
        char c = 'x';
        if (ratio || false) {
            report(j, ratio, "done, really");
            running = false;
        }
    }

    report(LIMIT, 3, greeting);
    return;
}

// Declared after its first use.
void report(int code, double value, String text) {
    if (value) {
        return;
    }
    return;
}
"#;

#[test]
fn test_legal_program() {
    assert!(verify_source(LEGAL_PROGRAM).is_ok());
}

#[test]
fn test_verification_is_repeatable() {
    let lines = LEGAL_PROGRAM.lines().collect::<Vec<&str>>();
    assert!(verify(&lines).is_ok());
    assert!(verify(&lines).is_ok());

    let illegal = "void foo() {\n    x = 1;\n    return;\n}\n";
    assert_eq!(first_error(illegal), first_error(illegal));
}

#[test]
fn test_forward_method_reference() {
    let source = "void foo() {\n    bar();\n    return;\n}\nvoid bar() {\n    return;\n}\n";
    assert!(verify_source(source).is_ok());
}

#[test]
fn test_final_without_initializer() {
    assert_eq!(first_error("final int x;\n"), (String::from("UninitializedFinalDeclaration"), 1));

    let local = "void foo() {\n    final int x;\n    return;\n}\n";
    assert_eq!(first_error(local), (String::from("UninitializedFinalDeclaration"), 2));
}

#[test]
fn test_final_reassignment() {
    let source = "final int x = 1;\nvoid foo() {\n    x = 2;\n    return;\n}\n";
    assert_eq!(first_error(source), (String::from("FinalReassignment"), 3));

    let parameter = "void foo(final int p) {\n    p = 2;\n    return;\n}\n";
    assert_eq!(first_error(parameter), (String::from("FinalReassignment"), 2));
}

#[test]
fn test_duplicate_names() {
    assert_eq!(first_error("int a, a;\n"), (String::from("DuplicateInStatement"), 1));
    assert_eq!(first_error("int a = 1, a = 2;\n"), (String::from("DuplicateInStatement"), 1));
    assert_eq!(first_error("int a;\nint a;\n"), (String::from("VariableAlreadyDeclared"), 2));
}

#[test]
fn test_global_initialization_stays_inside_method() {
    let source = r#"int g;
void foo() {
    g = 5;
    if (g) {
    }
    return;
}
void bar() {
    if (g) {
    }
    return;
}
"#;
    let error = verify_source(source).unwrap_err();
    assert_eq!(error.get_line(), 9);
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::VariableUninitializedUse { variable: String::from("g") }
    );
}

#[test]
fn test_global_assignment_in_global_scope() {
    let source = "int g;\ng = 5;\nvoid bar() {\n    int copy = g;\n    return;\n}\n";
    assert!(verify_source(source).is_ok());
}

#[test]
fn test_condition_operands() {
    let numeric = "void foo(double x) {\n    if (5) {\n    }\n    while (x) {\n    }\n    return;\n}\n";
    assert!(verify_source(numeric).is_ok());

    let string = "void foo(String x) {\n    if (x) {\n    }\n    return;\n}\n";
    assert_eq!(first_error(string), (String::from("TypeIncompatible"), 2));
}

#[test]
fn test_method_must_end_with_return() {
    let missing = "void foo() {\n    int a = 1;\n}\n";
    assert_eq!(first_error(missing), (String::from("MissingReturnBeforeBlockEnd"), 3));

    let present = "void foo() {\n    int a = 1;\n    return;\n}\n";
    assert!(verify_source(present).is_ok());
}

#[test]
fn test_unclosed_method() {
    let source = "void foo() {\n    return;\n";
    assert_eq!(first_error(source), (String::from("UnclosedScope"), 3));

    let nested = "void foo() {\n    if (true) {\n    return;\n}\n";
    assert_eq!(first_error(nested), (String::from("UnclosedScope"), 5));
}

#[test]
fn test_statements_outside_methods() {
    assert_eq!(first_error("foo();\nvoid foo() {\n    return;\n}\n"), (String::from("MethodCallOutsideMethod"), 1));
    assert_eq!(first_error("if (true) {\n}\n"), (String::from("ConditionOutsideMethod"), 1));
    assert_eq!(first_error("return;\n"), (String::from("ReturnOutsideMethod"), 1));
}

#[test]
fn test_nested_method_declaration() {
    let source = "void foo() {\n    void bar() {\n        return;\n    }\n    return;\n}\n";
    assert_eq!(first_error(source), (String::from("MethodDeclarationOutsideGlobal"), 2));
}

#[test]
fn test_method_calls() {
    let header = "void take(int a, boolean b) {\n    return;\n}\n";

    let legal = format!("{}void main() {{\n    take(1, 2.5);\n    return;\n}}\n", header);
    assert!(verify_source(&legal).is_ok());

    let arity = format!("{}void main() {{\n    take(1);\n    return;\n}}\n", header);
    assert_eq!(first_error(&arity), (String::from("MethodArityMismatch"), 5));

    let types = format!("{}void main() {{\n    take(\"1\", true);\n    return;\n}}\n", header);
    assert_eq!(first_error(&types), (String::from("MethodArgumentTypeMismatch"), 5));

    let unknown = "void main() {\n    missing();\n    return;\n}\n";
    assert_eq!(first_error(unknown), (String::from("MethodNotDeclared"), 2));
}

#[test]
fn test_duplicate_method() {
    let source = "void foo() {\n    return;\n}\nvoid foo() {\n    return;\n}\n";
    assert_eq!(first_error(source), (String::from("MethodAlreadyDeclared"), 4));
}

#[test]
fn test_variable_scoping() {
    let shadowing = "int a = 1;\nvoid foo() {\n    String a = \"s\";\n    if (true) {\n        double a = 2;\n    }\n    return;\n}\n";
    assert!(verify_source(shadowing).is_ok());

    let out_of_scope = "void foo() {\n    if (true) {\n        int inner = 1;\n    }\n    inner = 2;\n    return;\n}\n";
    assert_eq!(first_error(out_of_scope), (String::from("VariableNotDeclared"), 5));

    let uninitialized = "void foo() {\n    int a;\n    int b = a;\n    return;\n}\n";
    assert_eq!(first_error(uninitialized), (String::from("VariableUninitializedUse"), 3));
}

#[test]
fn test_comments_and_unknown_lines() {
    let indented = "void foo() {\n  // not allowed\n    return;\n}\n";
    assert_eq!(first_error(indented), (String::from("IllegalComment"), 2));

    let block_comment = "/* not s-Java */\n";
    assert_eq!(first_error(block_comment), (String::from("UnknownLineSyntax"), 1));

    let operators = "void foo() {\n    int a = 1;\n    a = a + 1;\n    return;\n}\n";
    assert_eq!(first_error(operators), (String::from("AssignmentSyntax"), 3));
}

#[test]
fn test_verify_file() {
    let mut file = tempfile::Builder::new().suffix(".sjava").tempfile().unwrap();
    file.write_all(LEGAL_PROGRAM.as_bytes()).unwrap();
    assert!(matches!(verify_file(file.path()), Ok(Ok(()))));

    let mut unclosed = tempfile::Builder::new().suffix(".sjava").tempfile().unwrap();
    unclosed.write_all(b"void foo() {\n").unwrap();
    let error = verify_file(unclosed.path()).unwrap().unwrap_err();
    assert_eq!(error.get_error_name(), "UnclosedScope");
    assert_eq!(error.get_line(), 2);

    let dir = tempfile::tempdir().unwrap();
    assert!(verify_file(&dir.path().join("missing.sjava")).is_err());
}

#[test]
fn test_trailing_block_end() {
    let source = "void f() {\n    return;\n}\n}\n";
    assert_eq!(first_error(source), (String::from("UnclosedScope"), 5));
}
