use crate::{
    errors::errors::{Error, ErrorImpl},
    validator::{
        condition::validate_condition_block,
        declaration::{validate_assignment, validate_declaration},
        method_call::validate_method_call,
        method_declaration::validate_method_declaration,
        return_statement::validate_return,
    },
    MK_ERROR,
};

use super::verifier::Verifier;

pub fn handle_illegal_comment(verifier: &mut Verifier, _line: &str) -> Result<(), Error> {
    Err(MK_ERROR!(ErrorImpl::IllegalComment, verifier.get_line_number()))
}

/// Global declarations were already handled on the declaration pass.
pub fn handle_variable_declaration(verifier: &mut Verifier, line: &str) -> Result<(), Error> {
    if verifier.get_context().is_in_global_scope() {
        return Ok(());
    }

    let line_number = verifier.get_line_number();
    validate_declaration(line, verifier.get_context_mut(), line_number, false)
}

pub fn handle_method_declaration(verifier: &mut Verifier, line: &str) -> Result<(), Error> {
    let line_number = verifier.get_line_number();
    validate_method_declaration(line, verifier.get_context_mut(), line_number, false)
}

pub fn handle_conditional_block(verifier: &mut Verifier, line: &str) -> Result<(), Error> {
    let line_number = verifier.get_line_number();
    validate_condition_block(line, verifier.get_context_mut(), line_number)
}

/// Closes the innermost scope. A method body must end with `return;`.
pub fn handle_block_end(verifier: &mut Verifier, _line: &str) -> Result<(), Error> {
    let line_number = verifier.get_line_number();

    if !verifier.previous_was_return() && verifier.get_context().is_in_method_scope() {
        return Err(MK_ERROR!(ErrorImpl::MissingReturnBeforeBlockEnd, line_number));
    }

    verifier.get_context_mut().pop_scope(line_number)
}

pub fn handle_method_call(verifier: &mut Verifier, line: &str) -> Result<(), Error> {
    validate_method_call(line, verifier.get_context(), verifier.get_line_number())
}

pub fn handle_variable_assignment(verifier: &mut Verifier, line: &str) -> Result<(), Error> {
    if verifier.get_context().is_in_global_scope() {
        return Ok(());
    }

    let line_number = verifier.get_line_number();
    validate_assignment(line, verifier.get_context_mut(), line_number)
}

pub fn handle_return_statement(verifier: &mut Verifier, line: &str) -> Result<(), Error> {
    validate_return(line, verifier.get_context(), verifier.get_line_number())
}
