use std::collections::HashMap;

use crate::{classifier::classifier::LineCategory, errors::errors::Error};

use super::{handlers::*, verifier::Verifier};

pub type LineHandler = fn(&mut Verifier, &str) -> Result<(), Error>;

// Unknown lines have no handler; the verifier reports them itself.
pub type HandlerLookup = HashMap<LineCategory, LineHandler>;

pub fn create_line_lookups(verifier: &mut Verifier) {
    verifier.handler(LineCategory::IllegalComment, handle_illegal_comment);

    // Declarations
    verifier.handler(LineCategory::VariableDeclaration, handle_variable_declaration);
    verifier.handler(LineCategory::MethodDeclaration, handle_method_declaration);

    // Blocks
    verifier.handler(LineCategory::ConditionalBlockStart, handle_conditional_block);
    verifier.handler(LineCategory::BlockEnd, handle_block_end);

    // Statements
    verifier.handler(LineCategory::MethodCall, handle_method_call);
    verifier.handler(LineCategory::VariableAssignment, handle_variable_assignment);
    verifier.handler(LineCategory::ReturnStatement, handle_return_statement);
}
