use crate::{
    classifier::patterns::METHOD_CALL,
    context::{context::Context, types::VariableType},
    errors::errors::{Error, ErrorImpl},
    MK_ERROR,
};

use super::values::{literal_fits, literal_type, split_arguments};

/// Validates `name(args);` against the registered signature of `name`.
pub fn validate_method_call(line: &str, context: &Context, line_number: u32) -> Result<(), Error> {
    let captures = METHOD_CALL
        .captures(line)
        .ok_or_else(|| MK_ERROR!(ErrorImpl::UnknownLineSyntax { line: String::from(line) }, line_number))?;
    let method_name = captures.get(1).map_or("", |m| m.as_str());

    if context.is_in_global_scope() {
        return Err(MK_ERROR!(ErrorImpl::MethodCallOutsideMethod { method: String::from(method_name) }, line_number));
    }

    let signature = context.get_method(method_name, line_number)?;
    let arguments = split_arguments(captures.get(2).map_or("", |m| m.as_str()));

    if arguments.iter().any(|argument| argument.is_empty()) {
        return Err(MK_ERROR!(ErrorImpl::EmptyArgument { method: String::from(method_name) }, line_number));
    }

    if arguments.len() != signature.arity() {
        return Err(MK_ERROR!(
            ErrorImpl::MethodArityMismatch {
                method: String::from(method_name),
                expected: signature.arity(),
                received: arguments.len(),
            },
            line_number
        ));
    }

    for (argument, parameter) in arguments.iter().zip(signature.parameters.iter()) {
        check_argument(context, argument, parameter.var_type, line_number)?;
    }

    Ok(())
}

/// Literals follow the declaration rules, so a `boolean` parameter takes
/// numeric literals. Variables must match the parameter type exactly.
fn check_argument(context: &Context, argument: &str, expected: VariableType, line_number: u32) -> Result<(), Error> {
    let mismatch = |received: String| {
        MK_ERROR!(ErrorImpl::MethodArgumentTypeMismatch { expected: expected.to_string(), received }, line_number)
    };

    if literal_type(argument) != VariableType::Unknown {
        return if literal_fits(argument, expected) {
            Ok(())
        } else {
            Err(mismatch(String::from(argument)))
        };
    }

    let record = context
        .get_variable(argument)
        .ok_or_else(|| MK_ERROR!(ErrorImpl::VariableNotDeclared { variable: String::from(argument) }, line_number))?;

    if !context.is_variable_initialized(argument) {
        return Err(MK_ERROR!(ErrorImpl::VariableUninitializedUse { variable: String::from(argument) }, line_number));
    }

    if record.var_type != expected {
        return Err(mismatch(record.var_type.to_string()));
    }

    Ok(())
}
