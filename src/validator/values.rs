use crate::{
    classifier::patterns::{
        CHAR_TOKEN, DOUBLE_TOKEN, FALSE_CONSTANT, IDENTIFIER_TOKEN, INT_TOKEN, STRING_TOKEN,
        TRUE_CONSTANT,
    },
    context::{context::Context, types::VariableType},
    errors::errors::{Error, ErrorImpl},
    MK_ERROR,
};

pub fn is_boolean_constant(value: &str) -> bool {
    value == TRUE_CONSTANT || value == FALSE_CONSTANT
}

pub fn is_identifier(value: &str) -> bool {
    IDENTIFIER_TOKEN.is_match(value)
}

/// The type of a literal constant, or `Unknown` if `value` is not a literal.
///
/// Integers are tested before doubles, so `5` is an `int` literal.
pub fn literal_type(value: &str) -> VariableType {
    if STRING_TOKEN.is_match(value) {
        VariableType::String
    } else if INT_TOKEN.is_match(value) {
        VariableType::Int
    } else if CHAR_TOKEN.is_match(value) {
        VariableType::Char
    } else if is_boolean_constant(value) {
        VariableType::Boolean
    } else if DOUBLE_TOKEN.is_match(value) {
        VariableType::Double
    } else {
        VariableType::Unknown
    }
}

/// Whether the literal `value` can initialize a variable of type `target`.
pub fn literal_fits(value: &str, target: VariableType) -> bool {
    match target {
        VariableType::String => STRING_TOKEN.is_match(value),
        VariableType::Int => INT_TOKEN.is_match(value),
        VariableType::Char => CHAR_TOKEN.is_match(value),
        VariableType::Double => DOUBLE_TOKEN.is_match(value),
        VariableType::Boolean => is_boolean_constant(value) || DOUBLE_TOKEN.is_match(value),
        VariableType::Unknown => false,
    }
}

/// Checks the right-hand side of a declaration or assignment against the
/// type of the variable receiving it.
pub fn check_value(context: &Context, target: VariableType, value: &str, line: u32) -> Result<(), Error> {
    let literal = literal_type(value);
    if literal != VariableType::Unknown {
        if literal_fits(value, target) {
            return Ok(());
        }
        return Err(MK_ERROR!(ErrorImpl::TypeIncompatible { expected: target.to_string(), received: literal.to_string() }, line));
    }

    if !is_identifier(value) {
        return Err(MK_ERROR!(ErrorImpl::AssignmentSyntax { line: String::from(value) }, line));
    }

    let record = *context
        .get_variable(value)
        .ok_or_else(|| MK_ERROR!(ErrorImpl::VariableNotDeclared { variable: String::from(value) }, line))?;

    if !context.is_variable_initialized(value) {
        return Err(MK_ERROR!(ErrorImpl::VariableUninitializedUse { variable: String::from(value) }, line));
    }

    if !target.accepts(record.var_type) {
        return Err(MK_ERROR!(ErrorImpl::TypeIncompatible { expected: target.to_string(), received: record.var_type.to_string() }, line));
    }

    Ok(())
}

/// Splits a parameter or argument list on commas outside quotes. An empty
/// list yields no items; empty slots between commas are kept as `""`.
pub fn split_arguments(list: &str) -> Vec<&str> {
    if list.trim().is_empty() {
        return vec![];
    }

    let mut arguments = vec![];
    let mut start = 0;
    let mut quote: Option<char> = None;

    for (index, ch) in list.char_indices() {
        match quote {
            Some(open) if ch == open => quote = None,
            Some(_) => {}
            None if ch == '"' || ch == '\'' => quote = Some(ch),
            None if ch == ',' => {
                arguments.push(list[start..index].trim());
                start = index + 1;
            }
            None => {}
        }
    }

    arguments.push(list[start..].trim());
    arguments
}
