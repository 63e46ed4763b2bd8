//! The two-pass driver.
//!
//! The declaration pass walks the file with a plain nesting counter. It
//! registers every top-level method signature and every global variable, so
//! both can be referenced before the line that declares them.
//!
//! The verification pass walks the file again with the real scope stack,
//! classifies each line and hands it to the handler registered for its
//! category. The first error aborts the run.

use tracing::{debug, trace};

use crate::{
    classifier::classifier::{is_skippable, Classifier, LineCategory},
    context::context::Context,
    errors::errors::{Error, ErrorImpl},
    validator::{
        declaration::{validate_assignment, validate_declaration},
        method_declaration::validate_method_declaration,
    },
    MK_ERROR,
};

use super::lookups::{create_line_lookups, HandlerLookup, LineHandler};

/// State for one verification run over one file.
pub struct Verifier {
    /// Methods, globals and the scope stack
    context: Context,
    classifier: Classifier,
    /// Line handlers for the verification pass
    handler_lookup: HandlerLookup,
    /// 1-based number of the line being processed
    line_number: u32,
    /// Block nesting seen by the declaration pass
    scope_track: i32,
    /// Whether the last non-blank line was `return;`
    previous_was_return: bool,
}

impl Verifier {
    pub fn new() -> Self {
        let mut verifier = Verifier {
            context: Context::new(),
            classifier: Classifier::new(),
            handler_lookup: HandlerLookup::new(),
            line_number: 0,
            scope_track: 0,
            previous_was_return: false,
        };

        create_line_lookups(&mut verifier);
        verifier
    }

    /// Registers the handler for a line category.
    pub fn handler(&mut self, category: LineCategory, handler: LineHandler) {
        self.handler_lookup.insert(category, handler);
    }

    /// Returns a reference to the line handler lookup table.
    pub fn get_handler_lookup(&self) -> &HandlerLookup {
        &self.handler_lookup
    }

    pub fn get_context(&self) -> &Context {
        &self.context
    }

    pub fn get_context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    pub fn get_line_number(&self) -> u32 {
        self.line_number
    }

    pub fn previous_was_return(&self) -> bool {
        self.previous_was_return
    }

    /// Runs both passes over `lines`.
    pub fn run<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<(), Error> {
        self.declaration_pass(lines)?;
        self.verification_pass(lines)
    }

    fn declaration_pass<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<(), Error> {
        debug!(lines = lines.len(), "starting declaration pass");
        self.line_number = 0;

        for raw_line in lines {
            self.line_number += 1;
            let raw_line = raw_line.as_ref();
            if is_skippable(raw_line) {
                continue;
            }

            let line = raw_line.trim();

            // Nested declarations are left for the verification pass to reject.
            if self.classifier.matches(LineCategory::MethodDeclaration, line) {
                if self.scope_track == 0 {
                    validate_method_declaration(line, &mut self.context, self.line_number, true)?;
                }
                self.scope_track += 1;
            }

            if self.classifier.matches(LineCategory::ConditionalBlockStart, line) {
                self.scope_track += 1;
            }

            if self.classifier.matches(LineCategory::BlockEnd, line) {
                self.scope_track -= 1;
            }

            if self.scope_track == 0 {
                if self.classifier.matches(LineCategory::VariableDeclaration, line) {
                    validate_declaration(line, &mut self.context, self.line_number, true)?;
                }

                if self.classifier.matches(LineCategory::VariableAssignment, line) {
                    validate_assignment(line, &mut self.context, self.line_number)?;
                }
            }
        }

        self.check_scopes_closed(lines.len())
    }

    fn verification_pass<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<(), Error> {
        debug!(lines = lines.len(), "starting verification pass");
        self.line_number = 0;
        self.previous_was_return = false;

        for raw_line in lines {
            self.line_number += 1;
            let raw_line = raw_line.as_ref();
            if is_skippable(raw_line) {
                continue;
            }

            let line = raw_line.trim();
            let category = self.classifier.classify(line);
            trace!(line = self.line_number, ?category, depth = self.context.depth(), "classified line");

            let handler = self.get_handler_lookup().get(&category).copied();
            match handler {
                Some(handler) => handler(self, line)?,
                None => {
                    return Err(MK_ERROR!(ErrorImpl::UnknownLineSyntax { line: String::from(line) }, self.line_number));
                }
            }

            self.previous_was_return = category == LineCategory::ReturnStatement;
        }

        self.check_scopes_closed(lines.len())
    }

    /// Reported one line past the end of the file.
    fn check_scopes_closed(&self, line_count: usize) -> Result<(), Error> {
        if self.scope_track != 0 || !self.context.is_in_global_scope() {
            return Err(MK_ERROR!(ErrorImpl::UnclosedScope, line_count as u32 + 1));
        }

        Ok(())
    }
}

impl Default for Verifier {
    fn default() -> Self {
        Verifier::new()
    }
}

/// Verifies a program given as its lines. Every call starts from an empty
/// context, so the result depends only on `lines`.
pub fn verify<S: AsRef<str>>(lines: &[S]) -> Result<(), Error> {
    Verifier::new().run(lines)
}

pub fn verify_source(source: &str) -> Result<(), Error> {
    let lines = source.lines().collect::<Vec<&str>>();
    verify(&lines)
}
