use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    classifier::patterns::{DOUBLE_LITERAL, IDENTIFIER},
    context::{context::Context, types::VariableType},
    errors::errors::{Error, ErrorImpl},
    MK_ERROR, MK_PATTERN,
};

use super::values::{is_boolean_constant, is_identifier};

lazy_static! {
    static ref CONDITION_START: Regex = MK_PATTERN!(r"^\s*(?:if|while)\s*\(");
    static ref CONDITION_END: Regex = MK_PATTERN!(r"\s*\)\s*\{\s*$");
    // Double literals include plain integers.
    static ref CONDITION_SYNTAX: Regex = MK_PATTERN!(&format!(
        r"^(?:\s*{op}\s*(?:&&|\|\|))*\s*{op}\s*$",
        op = format!("(?:true|false|{}|{})", IDENTIFIER, DOUBLE_LITERAL)
    ));
    static ref LOGICAL_OPERATOR: Regex = MK_PATTERN!(r"&&|\|\|");
}

/// Validates an `if (...) {` or `while (...) {` line and opens its block scope.
pub fn validate_condition_block(line: &str, context: &mut Context, line_number: u32) -> Result<(), Error> {
    if context.is_in_global_scope() {
        return Err(MK_ERROR!(ErrorImpl::ConditionOutsideMethod, line_number));
    }

    let condition = extract_condition(line);
    if !CONDITION_SYNTAX.is_match(condition) {
        return Err(MK_ERROR!(ErrorImpl::ConditionSyntax { condition: String::from(condition) }, line_number));
    }

    for operand in LOGICAL_OPERATOR.split(condition).map(str::trim) {
        if is_boolean_constant(operand) || !is_identifier(operand) {
            continue;
        }

        let record = context
            .get_variable(operand)
            .ok_or_else(|| MK_ERROR!(ErrorImpl::VariableNotDeclared { variable: String::from(operand) }, line_number))?;

        if !record.var_type.is_condition_operand() {
            return Err(MK_ERROR!(
                ErrorImpl::TypeIncompatible {
                    expected: VariableType::Boolean.to_string(),
                    received: record.var_type.to_string(),
                },
                line_number
            ));
        }

        if !context.is_variable_initialized(operand) {
            return Err(MK_ERROR!(ErrorImpl::VariableUninitializedUse { variable: String::from(operand) }, line_number));
        }
    }

    context.push_scope();
    Ok(())
}

/// The text between `if (` / `while (` and the closing `) {`, trimmed.
fn extract_condition(line: &str) -> &str {
    let start = CONDITION_START.find(line).map_or(0, |m| m.end());
    let end = CONDITION_END.find(line).map_or(line.len(), |m| m.start());

    if start > end {
        ""
    } else {
        line[start..end].trim()
    }
}
