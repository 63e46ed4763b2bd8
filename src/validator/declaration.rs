use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    classifier::patterns::{is_reserved, IDENTIFIER, TYPE_KEYWORDS},
    context::{context::Context, types::VariableType},
    errors::errors::{Error, ErrorImpl},
    MK_ERROR, MK_PATTERN,
};

use super::values::check_value;

/// A right-hand side: anything up to the next `,` or `;`, not starting with whitespace.
const VALUE: &str = r"[^,;\s][^,;]*";

lazy_static! {
    static ref DECLARATION_SYNTAX: Regex = MK_PATTERN!(&format!(
        r"^(final\s+)?({types})\s+{id}(?:\s*=\s*{value})?(?:\s*,\s*{id}(?:\s*=\s*{value})?)*\s*;$",
        types = TYPE_KEYWORDS,
        id = IDENTIFIER,
        value = VALUE
    ));
    static ref ASSIGNMENT_SYNTAX: Regex = MK_PATTERN!(&format!(
        r"^{id}\s*=\s*{value}(?:\s*,\s*{id}\s*=\s*{value})*\s*;$",
        id = IDENTIFIER,
        value = VALUE
    ));
    static ref DECLARATION_PREFIX: Regex = MK_PATTERN!(&format!(r"^(final\s+)?({})\s+", TYPE_KEYWORDS));
    static ref LINE_END: Regex = MK_PATTERN!(r"\s*;\s*$");
    static ref CLAUSE_SEPARATOR: Regex = MK_PATTERN!(r"\s*,\s*");
    static ref INITIALIZATION: Regex = MK_PATTERN!(&format!(r"^({})\s*=\s*(.+)$", IDENTIFIER));
}

/// One `name` or `name = value` item of a declaration or assignment.
#[derive(Debug, PartialEq)]
struct Clause<'a> {
    name: &'a str,
    value: Option<&'a str>,
}

fn parse_clauses(body: &str, line: u32) -> Result<Vec<Clause<'_>>, Error> {
    let mut clauses: Vec<Clause> = vec![];

    for piece in CLAUSE_SEPARATOR.split(body) {
        let clause = match INITIALIZATION.captures(piece) {
            Some(captures) => Clause {
                name: captures.get(1).map_or("", |m| m.as_str()),
                value: captures.get(2).map(|m| m.as_str().trim()),
            },
            None => Clause { name: piece.trim(), value: None },
        };

        if clauses.iter().any(|existing| existing.name == clause.name) {
            return Err(MK_ERROR!(ErrorImpl::DuplicateInStatement { variable: String::from(clause.name) }, line));
        }
        clauses.push(clause);
    }

    Ok(clauses)
}

fn statement_end(line: &str) -> usize {
    LINE_END.find(line).map_or(line.len(), |m| m.start())
}

/// Validates `[final] type a [= v], b [= v], ...;` and declares every name
/// in the active scope.
///
/// In the global scope declarations are only handled on the declaration
/// pass; the verification pass accepts them unchanged.
pub fn validate_declaration(line: &str, context: &mut Context, line_number: u32, first_pass: bool) -> Result<(), Error> {
    if context.is_in_global_scope() && !first_pass {
        return Ok(());
    }

    let captures = DECLARATION_SYNTAX
        .captures(line)
        .ok_or_else(|| MK_ERROR!(ErrorImpl::DeclarationSyntax { line: String::from(line) }, line_number))?;
    let is_final = captures.get(1).is_some();
    let var_type = VariableType::from_keyword(captures.get(2).map_or("", |m| m.as_str()), line_number)?;

    let body_start = DECLARATION_PREFIX.find(line).map_or(0, |m| m.end());
    let clauses = parse_clauses(&line[body_start..statement_end(line)], line_number)?;

    for clause in clauses {
        if is_reserved(clause.name) {
            return Err(MK_ERROR!(ErrorImpl::ReservedWordMisuse { word: String::from(clause.name) }, line_number));
        }

        if context.is_declared_in_current_scope(clause.name) {
            return Err(MK_ERROR!(ErrorImpl::VariableAlreadyDeclared { variable: String::from(clause.name) }, line_number));
        }

        if is_final && clause.value.is_none() {
            return Err(MK_ERROR!(ErrorImpl::UninitializedFinalDeclaration { variable: String::from(clause.name) }, line_number));
        }

        if let Some(value) = clause.value {
            check_value(context, var_type, value, line_number)?;
        }

        context.declare_variable(clause.name, var_type, is_final, clause.value.is_some(), line_number)?;
    }

    Ok(())
}

/// Validates `a = v, b = v, ...;` against already declared variables and
/// marks each of them initialized.
pub fn validate_assignment(line: &str, context: &mut Context, line_number: u32) -> Result<(), Error> {
    if !ASSIGNMENT_SYNTAX.is_match(line) {
        return Err(MK_ERROR!(ErrorImpl::AssignmentSyntax { line: String::from(line) }, line_number));
    }

    let clauses = parse_clauses(&line[..statement_end(line)], line_number)?;

    for clause in clauses {
        let record = *context
            .get_variable(clause.name)
            .ok_or_else(|| MK_ERROR!(ErrorImpl::VariableNotDeclared { variable: String::from(clause.name) }, line_number))?;

        // Finals are always initialized at declaration, so any assignment is a reassignment.
        if record.is_final {
            return Err(MK_ERROR!(ErrorImpl::FinalReassignment { variable: String::from(clause.name) }, line_number));
        }

        let value = clause
            .value
            .ok_or_else(|| MK_ERROR!(ErrorImpl::AssignmentSyntax { line: String::from(line) }, line_number))?;
        check_value(context, record.var_type, value, line_number)?;

        context.initialize_variable(clause.name, line_number)?;
    }

    Ok(())
}
