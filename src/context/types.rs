use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{errors::errors::{Error, ErrorImpl}, MK_ERROR};

lazy_static! {
    pub static ref TYPE_LOOKUP: HashMap<&'static str, VariableType> = {
        let mut map = HashMap::new();
        map.insert("int", VariableType::Int);
        map.insert("double", VariableType::Double);
        map.insert("boolean", VariableType::Boolean);
        map.insert("String", VariableType::String);
        map.insert("char", VariableType::Char);
        map
    };
}

/// The primitive value kinds of the language.
///
/// `Unknown` is never a declarable type. It marks a value whose kind could not
/// be determined, e.g. a token that is not a literal.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum VariableType {
    Int,
    Double,
    Boolean,
    String,
    Char,
    Unknown,
}

impl VariableType {
    pub fn from_keyword(keyword: &str, line: u32) -> Result<VariableType, Error> {
        TYPE_LOOKUP.get(keyword).copied().ok_or_else(|| {
            MK_ERROR!(ErrorImpl::UnknownType { type_: String::from(keyword) }, line)
        })
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            VariableType::Int => "int",
            VariableType::Double => "double",
            VariableType::Boolean => "boolean",
            VariableType::String => "String",
            VariableType::Char => "char",
            VariableType::Unknown => "unknown",
        }
    }

    /// Whether a value of type `value` may be stored in a variable of this type.
    ///
    /// `double` widens from `int`, and `boolean` accepts any numeric value.
    pub fn accepts(&self, value: VariableType) -> bool {
        match self {
            VariableType::Double => matches!(value, VariableType::Double | VariableType::Int),
            VariableType::Boolean => matches!(
                value,
                VariableType::Boolean | VariableType::Int | VariableType::Double
            ),
            VariableType::Unknown => false,
            _ => *self == value,
        }
    }

    /// Whether a value of this type may be used as an `if`/`while` operand.
    pub fn is_condition_operand(&self) -> bool {
        VariableType::Boolean.accepts(*self)
    }
}

impl Display for VariableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
