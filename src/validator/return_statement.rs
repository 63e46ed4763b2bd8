use crate::{
    classifier::patterns::RETURN_STATEMENT,
    context::context::Context,
    errors::errors::{Error, ErrorImpl},
    MK_ERROR,
};

/// Only bare `return;` exists, and only inside a method.
pub fn validate_return(line: &str, context: &Context, line_number: u32) -> Result<(), Error> {
    if !RETURN_STATEMENT.is_match(line) {
        return Err(MK_ERROR!(ErrorImpl::UnknownLineSyntax { line: String::from(line) }, line_number));
    }

    if context.is_in_global_scope() {
        return Err(MK_ERROR!(ErrorImpl::ReturnOutsideMethod, line_number));
    }

    Ok(())
}
