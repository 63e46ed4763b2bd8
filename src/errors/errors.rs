use std::{fmt::Display, path::PathBuf};

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_line(&self) -> u32 {
        self.position.0
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::VariableUninitializedUse { .. } => "VariableUninitializedUse",
            ErrorImpl::FinalReassignment { .. } => "FinalReassignment",
            ErrorImpl::UninitializedFinalDeclaration { .. } => "UninitializedFinalDeclaration",
            ErrorImpl::DeclarationSyntax { .. } => "DeclarationSyntax",
            ErrorImpl::AssignmentSyntax { .. } => "AssignmentSyntax",
            ErrorImpl::DuplicateInStatement { .. } => "DuplicateInStatement",
            ErrorImpl::TypeIncompatible { .. } => "TypeIncompatible",
            ErrorImpl::MethodNotDeclared { .. } => "MethodNotDeclared",
            ErrorImpl::MethodAlreadyDeclared { .. } => "MethodAlreadyDeclared",
            ErrorImpl::MethodArityMismatch { .. } => "MethodArityMismatch",
            ErrorImpl::MethodArgumentTypeMismatch { .. } => "MethodArgumentTypeMismatch",
            ErrorImpl::MethodCallOutsideMethod { .. } => "MethodCallOutsideMethod",
            ErrorImpl::EmptyArgument { .. } => "EmptyArgument",
            ErrorImpl::InvalidParameter { .. } => "InvalidParameter",
            ErrorImpl::InvalidParameterName { .. } => "InvalidParameterName",
            ErrorImpl::ReservedWordMisuse { .. } => "ReservedWordMisuse",
            ErrorImpl::MethodDeclarationOutsideGlobal { .. } => "MethodDeclarationOutsideGlobal",
            ErrorImpl::ConditionOutsideMethod => "ConditionOutsideMethod",
            ErrorImpl::ConditionSyntax { .. } => "ConditionSyntax",
            ErrorImpl::ReturnOutsideMethod => "ReturnOutsideMethod",
            ErrorImpl::MissingReturnBeforeBlockEnd => "MissingReturnBeforeBlockEnd",
            ErrorImpl::UnmatchedBlockEnd => "UnmatchedBlockEnd",
            ErrorImpl::IllegalComment => "IllegalComment",
            ErrorImpl::UnknownLineSyntax { .. } => "UnknownLineSyntax",
            ErrorImpl::UnclosedScope => "UnclosedScope",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnknownType { type_ } => ErrorTip::Suggestion(format!(
                "Unknown type `{}`, expected one of int, double, boolean, char, String",
                type_
            )),
            ErrorImpl::VariableAlreadyDeclared { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` is already declared in this scope",
                variable
            )),
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::VariableUninitializedUse { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` is used before it is assigned a value",
                variable
            )),
            ErrorImpl::FinalReassignment { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` is final and cannot be assigned",
                variable
            )),
            ErrorImpl::UninitializedFinalDeclaration { variable } => ErrorTip::Suggestion(
                format!("Final variable `{}` must be initialized where it is declared", variable),
            ),
            ErrorImpl::DeclarationSyntax { .. } => ErrorTip::Suggestion(String::from(
                "Expected `[final] <type> <name> [= <value>], ...;`",
            )),
            ErrorImpl::AssignmentSyntax { .. } => ErrorTip::Suggestion(String::from(
                "Values must be a literal or the name of a variable",
            )),
            ErrorImpl::DuplicateInStatement { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` appears twice in one statement",
                variable
            )),
            ErrorImpl::TypeIncompatible { expected, received } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::MethodNotDeclared { method } => {
                ErrorTip::Suggestion(format!("Method `{}` not declared", method))
            }
            ErrorImpl::MethodAlreadyDeclared { method } => {
                ErrorTip::Suggestion(format!("Method `{}` already declared", method))
            }
            ErrorImpl::MethodArityMismatch {
                method,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "Method `{}` expects {} arguments, received {}",
                method, expected, received
            )),
            ErrorImpl::MethodArgumentTypeMismatch { expected, received } => {
                ErrorTip::Suggestion(format!(
                    "Expected argument type `{}`, received `{}`",
                    expected, received
                ))
            }
            ErrorImpl::MethodCallOutsideMethod { .. } => ErrorTip::Suggestion(String::from(
                "Methods can only be called from inside a method body",
            )),
            ErrorImpl::EmptyArgument { .. } => ErrorTip::None,
            ErrorImpl::InvalidParameter { .. } => {
                ErrorTip::Suggestion(String::from("Expected `[final] <type> <name>`"))
            }
            ErrorImpl::InvalidParameterName { name } => {
                ErrorTip::Suggestion(format!("`{}` is not a valid parameter name", name))
            }
            ErrorImpl::ReservedWordMisuse { word } => {
                ErrorTip::Suggestion(format!("`{}` is a reserved word", word))
            }
            ErrorImpl::MethodDeclarationOutsideGlobal { .. } => ErrorTip::Suggestion(
                String::from("Methods cannot be declared inside another method"),
            ),
            ErrorImpl::ConditionOutsideMethod => ErrorTip::Suggestion(String::from(
                "`if` and `while` blocks must appear inside a method",
            )),
            ErrorImpl::ConditionSyntax { .. } => ErrorTip::Suggestion(String::from(
                "Conditions are operands joined by `&&` or `||`",
            )),
            ErrorImpl::ReturnOutsideMethod => ErrorTip::None,
            ErrorImpl::MissingReturnBeforeBlockEnd => ErrorTip::Suggestion(String::from(
                "The last statement of a method must be `return;`",
            )),
            ErrorImpl::UnmatchedBlockEnd => ErrorTip::None,
            ErrorImpl::IllegalComment => ErrorTip::Suggestion(String::from(
                "Comments must start at the beginning of the line",
            )),
            ErrorImpl::UnknownLineSyntax { .. } => ErrorTip::None,
            ErrorImpl::UnclosedScope => ErrorTip::Suggestion(String::from(
                "Every `{` must be closed by a matching `}`",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {} - {}", self.position.0, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("invalid variable type: {type_:?}")]
    UnknownType { type_: String },
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("unassigned variable: {variable:?}")]
    VariableUninitializedUse { variable: String },
    #[error("cannot assign a value to final variable {variable:?}")]
    FinalReassignment { variable: String },
    #[error("final variable {variable:?} must be initialized")]
    UninitializedFinalDeclaration { variable: String },
    #[error("invalid declaration syntax: {line:?}")]
    DeclarationSyntax { line: String },
    #[error("invalid assignment syntax: {line:?}")]
    AssignmentSyntax { line: String },
    #[error("variable {variable:?} declared twice in one statement")]
    DuplicateInStatement { variable: String },
    #[error("incompatible types: expected {expected}, received {received}")]
    TypeIncompatible { expected: String, received: String },
    #[error("method {method:?} is not declared")]
    MethodNotDeclared { method: String },
    #[error("method {method:?} already declared")]
    MethodAlreadyDeclared { method: String },
    #[error("incorrect number of arguments for method {method:?}: expected {expected}, received {received}")]
    MethodArityMismatch {
        method: String,
        expected: usize,
        received: usize,
    },
    #[error("argument types do not match: expected {expected}, received {received:?}")]
    MethodArgumentTypeMismatch { expected: String, received: String },
    #[error("cannot call method {method:?} in the global scope")]
    MethodCallOutsideMethod { method: String },
    #[error("empty argument in call to {method:?}")]
    EmptyArgument { method: String },
    #[error("invalid parameter format: {parameter:?}")]
    InvalidParameter { parameter: String },
    #[error("invalid parameter name: {name:?}")]
    InvalidParameterName { name: String },
    #[error("reserved word {word:?} cannot be used as a name")]
    ReservedWordMisuse { word: String },
    #[error("method {method:?} cannot be declared inside another method")]
    MethodDeclarationOutsideGlobal { method: String },
    #[error("a conditional block must appear inside a method")]
    ConditionOutsideMethod,
    #[error("invalid condition syntax: {condition:?}")]
    ConditionSyntax { condition: String },
    #[error("return statements are not allowed outside of a method")]
    ReturnOutsideMethod,
    #[error("method must return before closing")]
    MissingReturnBeforeBlockEnd,
    #[error("closing brace without an open scope")]
    UnmatchedBlockEnd,
    #[error("comments must not be preceded by whitespace")]
    IllegalComment,
    #[error("unknown line type: {line:?}")]
    UnknownLineSyntax { line: String },
    #[error("all scopes must be closed")]
    UnclosedScope,
}

/// Failures of the surrounding shell, before any line reaches the verifier.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("invalid file extension for {path:?}, expected {expected}")]
    InvalidExtension { path: PathBuf, expected: &'static str },
    #[error("file does not exist or is not readable: {path:?}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
