use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

use crate::MK_PATTERN;

/// A variable name: letters first, or underscores followed by at least one word character.
pub const IDENTIFIER: &str = r"(?:[a-zA-Z]+\w*|_+\w+)";
/// Method and parameter names may not start with an underscore.
pub const METHOD_NAME: &str = r"[a-zA-Z]\w*";
pub const TYPE_KEYWORDS: &str = "int|double|boolean|char|String";

pub const INT_LITERAL: &str = r"[+-]?\d+";
pub const DOUBLE_LITERAL: &str = r"[+-]?(?:\d+(?:\.\d*)?|\.\d+)";
pub const STRING_LITERAL: &str = r#""[^"]*""#;
pub const CHAR_LITERAL: &str = r"'[^']'";

pub const TRUE_CONSTANT: &str = "true";
pub const FALSE_CONSTANT: &str = "false";

lazy_static! {
    pub static ref RESERVED_KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("int");
        set.insert("double");
        set.insert("boolean");
        set.insert("char");
        set.insert("String");
        set.insert("void");
        set.insert("if");
        set.insert("while");
        set.insert("return");
        set.insert("final");
        set
    };

    // Line grammars, one per line category.
    pub static ref EMPTY_LINE: Regex = MK_PATTERN!(r"^\s*$");
    pub static ref METHOD_DECLARATION: Regex =
        MK_PATTERN!(&format!(r"^void\s+({})\s*\((.*)\)\s*\{{\s*$", METHOD_NAME));
    pub static ref VARIABLE_DECLARATION: Regex =
        MK_PATTERN!(&format!(r"^\s*(final\s+)?({})\s+.+;\s*$", TYPE_KEYWORDS));
    pub static ref CONDITIONAL_BLOCK: Regex = MK_PATTERN!(r"^\s*(if|while)\s*\(.*\)\s*\{\s*$");
    pub static ref METHOD_CALL: Regex =
        MK_PATTERN!(&format!(r"^({})\s*\(([^)]*)\)\s*;$", METHOD_NAME));
    pub static ref BLOCK_END: Regex = MK_PATTERN!(r"^\s*\}\s*$");
    pub static ref VARIABLE_ASSIGNMENT: Regex = MK_PATTERN!(r"^\s*\w+\s*=\s*.+;\s*$");
    pub static ref RETURN_STATEMENT: Regex = MK_PATTERN!(r"^\s*return\s*;\s*$");

    // Whole-token matchers for values and names.
    pub static ref IDENTIFIER_TOKEN: Regex = MK_PATTERN!(&format!("^{}$", IDENTIFIER));
    pub static ref METHOD_NAME_TOKEN: Regex = MK_PATTERN!(&format!("^{}$", METHOD_NAME));
    pub static ref INT_TOKEN: Regex = MK_PATTERN!(&format!("^{}$", INT_LITERAL));
    pub static ref DOUBLE_TOKEN: Regex = MK_PATTERN!(&format!("^{}$", DOUBLE_LITERAL));
    pub static ref STRING_TOKEN: Regex = MK_PATTERN!(&format!("^{}$", STRING_LITERAL));
    pub static ref CHAR_TOKEN: Regex = MK_PATTERN!(&format!("^{}$", CHAR_LITERAL));
}

pub fn is_reserved(word: &str) -> bool {
    RESERVED_KEYWORDS.contains(word)
}
