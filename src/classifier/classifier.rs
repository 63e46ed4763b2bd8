use regex::Regex;

use super::patterns::{
    BLOCK_END, CONDITIONAL_BLOCK, EMPTY_LINE, METHOD_CALL, METHOD_DECLARATION, RETURN_STATEMENT,
    VARIABLE_ASSIGNMENT, VARIABLE_DECLARATION,
};

pub const COMMENT_START: &str = "//";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LineCategory {
    /// A comment whose `//` was preceded by whitespace.
    IllegalComment,
    VariableDeclaration,
    MethodDeclaration,
    MethodCall,
    ConditionalBlockStart,
    BlockEnd,
    VariableAssignment,
    ReturnStatement,
    Unknown,
}

#[derive(Clone)]
pub struct LinePattern {
    regex: Regex,
    category: LineCategory,
}

/// Maps a trimmed line to its category by trying each grammar in priority order.
#[derive(Clone)]
pub struct Classifier {
    patterns: Vec<LinePattern>,
}

impl Classifier {
    pub fn new() -> Classifier {
        Classifier {
            patterns: vec![
                LinePattern { regex: METHOD_DECLARATION.clone(), category: LineCategory::MethodDeclaration },
                LinePattern { regex: VARIABLE_DECLARATION.clone(), category: LineCategory::VariableDeclaration },
                LinePattern { regex: CONDITIONAL_BLOCK.clone(), category: LineCategory::ConditionalBlockStart },
                LinePattern { regex: METHOD_CALL.clone(), category: LineCategory::MethodCall },
                LinePattern { regex: BLOCK_END.clone(), category: LineCategory::BlockEnd },
                LinePattern { regex: VARIABLE_ASSIGNMENT.clone(), category: LineCategory::VariableAssignment },
                LinePattern { regex: RETURN_STATEMENT.clone(), category: LineCategory::ReturnStatement },
            ],
        }
    }

    pub fn classify(&self, line: &str) -> LineCategory {
        if line.starts_with(COMMENT_START) {
            return LineCategory::IllegalComment;
        }

        self.patterns
            .iter()
            .find(|pattern| pattern.regex.is_match(line))
            .map(|pattern| pattern.category)
            .unwrap_or(LineCategory::Unknown)
    }

    /// Tests a single grammar, ignoring priority. The declaration pass uses
    /// this to look at every grammar a line satisfies.
    pub fn matches(&self, category: LineCategory, line: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.category == category && pattern.regex.is_match(line))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::new()
    }
}

/// Lines that are skipped before classification: blank lines and comments
/// that start in the very first column.
pub fn is_skippable(raw_line: &str) -> bool {
    EMPTY_LINE.is_match(raw_line) || raw_line.starts_with(COMMENT_START)
}
