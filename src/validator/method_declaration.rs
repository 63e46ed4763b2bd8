use crate::{
    classifier::patterns::{is_reserved, METHOD_DECLARATION, METHOD_NAME_TOKEN},
    context::{
        context::Context,
        symbols::{MethodSignature, Parameter},
        types::VariableType,
    },
    errors::errors::{Error, ErrorImpl},
    MK_ERROR,
};

use super::values::split_arguments;

const FINAL_KEYWORD: &str = "final";

/// Validates a `void name(params) {` line.
///
/// On the registration pass the signature is checked and added to the
/// method table. On the verification pass the method's body scope is entered.
pub fn validate_method_declaration(line: &str, context: &mut Context, line_number: u32, registration_pass: bool) -> Result<(), Error> {
    let captures = METHOD_DECLARATION
        .captures(line)
        .ok_or_else(|| MK_ERROR!(ErrorImpl::UnknownLineSyntax { line: String::from(line) }, line_number))?;
    let method_name = captures.get(1).map_or("", |m| m.as_str());

    if !context.is_in_global_scope() {
        return Err(MK_ERROR!(ErrorImpl::MethodDeclarationOutsideGlobal { method: String::from(method_name) }, line_number));
    }

    if !registration_pass {
        return context.push_method_scope(method_name, line_number);
    }

    if is_reserved(method_name) {
        return Err(MK_ERROR!(ErrorImpl::ReservedWordMisuse { word: String::from(method_name) }, line_number));
    }

    let parameters = split_arguments(captures.get(2).map_or("", |m| m.as_str()))
        .into_iter()
        .map(|parameter| parse_parameter(parameter, line_number))
        .collect::<Result<Vec<Parameter>, Error>>()?;

    context.add_method(
        MethodSignature {
            name: String::from(method_name),
            parameters,
        },
        line_number,
    )
}

/// Parses `[final] type name`.
fn parse_parameter(parameter: &str, line_number: u32) -> Result<Parameter, Error> {
    let invalid = || MK_ERROR!(ErrorImpl::InvalidParameter { parameter: String::from(parameter) }, line_number);

    let words = parameter.split_whitespace().collect::<Vec<&str>>();
    let (is_final, type_keyword, name) = match words.as_slice() {
        [type_keyword, name] if *type_keyword != FINAL_KEYWORD => (false, *type_keyword, *name),
        [FINAL_KEYWORD, type_keyword, name] => (true, *type_keyword, *name),
        _ => return Err(invalid()),
    };

    let var_type = VariableType::from_keyword(type_keyword, line_number)?;

    if is_reserved(name) {
        return Err(MK_ERROR!(ErrorImpl::ReservedWordMisuse { word: String::from(name) }, line_number));
    }

    if !METHOD_NAME_TOKEN.is_match(name) {
        return Err(MK_ERROR!(ErrorImpl::InvalidParameterName { name: String::from(name) }, line_number));
    }

    Ok(Parameter {
        name: String::from(name),
        var_type,
        is_final,
    })
}
