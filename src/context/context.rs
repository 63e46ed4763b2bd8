use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{errors::errors::{Error, ErrorImpl}, MK_ERROR};

use super::{
    scope::{Scope, ScopeId},
    symbols::{MethodSignature, VariableRecord},
    types::VariableType,
};

/// Scope-stack depth of the global scope.
pub const GLOBAL_DEPTH: usize = 1;
/// Scope-stack depth of a method's top-level body. Blocks nested inside a
/// method sit deeper and do not count as method scope.
pub const METHOD_DEPTH: usize = 2;

/// All state shared by the validators during one verification run.
///
/// Scopes are kept in an arena and linked to their parent by index. They are
/// pushed and popped strictly last-in-first-out, so the active scope is
/// always the last one in the arena.
#[derive(Debug)]
pub struct Context {
    methods: HashMap<String, MethodSignature>,
    scopes: Vec<Scope>,
}

impl Context {
    pub fn new() -> Self {
        Context {
            methods: HashMap::new(),
            scopes: vec![Scope::new(None)],
        }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_in_global_scope(&self) -> bool {
        self.depth() == GLOBAL_DEPTH
    }

    pub fn is_in_method_scope(&self) -> bool {
        self.depth() == METHOD_DEPTH
    }

    fn current_scope_id(&self) -> ScopeId {
        self.scopes.len() - 1
    }

    fn current_scope(&self) -> &Scope {
        &self.scopes[self.current_scope_id()]
    }

    fn current_scope_mut(&mut self) -> &mut Scope {
        let id = self.current_scope_id();
        &mut self.scopes[id]
    }

    pub fn push_scope(&mut self) {
        let parent = Some(self.current_scope_id());
        self.scopes.push(Scope::new(parent));
        debug!(depth = self.depth(), "pushed scope");
    }

    /// Enters the body of a registered method, seeding its parameters as
    /// initialized local variables.
    pub fn push_method_scope(&mut self, method_name: &str, line: u32) -> Result<(), Error> {
        let parameters = self.get_method(method_name, line)?.parameters.clone();
        self.push_scope();

        for parameter in parameters.iter() {
            let record = VariableRecord::new(parameter.var_type, parameter.is_final, false);
            self.current_scope_mut().declare_variable(&parameter.name, record, true, line)?;
        }
        Ok(())
    }

    pub fn pop_scope(&mut self, line: u32) -> Result<(), Error> {
        if self.is_in_global_scope() {
            return Err(MK_ERROR!(ErrorImpl::UnmatchedBlockEnd, line));
        }

        self.scopes.pop();
        debug!(depth = self.depth(), "popped scope");
        Ok(())
    }

    pub fn add_method(&mut self, signature: MethodSignature, line: u32) -> Result<(), Error> {
        if self.methods.contains_key(&signature.name) {
            return Err(MK_ERROR!(ErrorImpl::MethodAlreadyDeclared { method: signature.name }, line));
        }

        trace!(method = %signature.name, arity = signature.arity(), "registered method");
        self.methods.insert(signature.name.clone(), signature);
        Ok(())
    }

    pub fn get_method(&self, method_name: &str, line: u32) -> Result<&MethodSignature, Error> {
        self.methods
            .get(method_name)
            .ok_or_else(|| MK_ERROR!(ErrorImpl::MethodNotDeclared { method: String::from(method_name) }, line))
    }

    /// Declares a variable in the active scope. Whether it is global is fixed
    /// here, from the depth at the time of declaration.
    pub fn declare_variable(&mut self, variable_name: &str, var_type: VariableType, is_final: bool, is_initialized: bool, line: u32) -> Result<(), Error> {
        let record = VariableRecord::new(var_type, is_final, self.is_in_global_scope());
        trace!(variable = variable_name, %var_type, is_initialized, "declared variable");
        self.current_scope_mut().declare_variable(variable_name, record, is_initialized, line)
    }

    pub fn is_declared_in_current_scope(&self, variable_name: &str) -> bool {
        self.current_scope().declares(variable_name)
    }

    /// Walks from the active scope up through its ancestors. The nearest
    /// declaration wins.
    fn resolve(&self, variable_name: &str) -> Option<(ScopeId, &VariableRecord, bool)> {
        let mut scope_id = Some(self.current_scope_id());

        while let Some(id) = scope_id {
            let scope = &self.scopes[id];
            if let Some((record, is_initialized)) = scope.get_variable(variable_name) {
                return Some((id, record, is_initialized));
            }
            scope_id = scope.parent;
        }

        None
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<&VariableRecord> {
        self.resolve(variable_name).map(|(_, record, _)| record)
    }

    pub fn is_variable_initialized(&self, variable_name: &str) -> bool {
        matches!(self.resolve(variable_name), Some((_, _, true)))
    }

    /// Records that a variable now holds a value.
    ///
    /// A global assigned from inside a method is not changed in the global
    /// scope. An initialized copy is placed in the enclosing method scope
    /// instead, so the assignment is only visible for the rest of that method.
    pub fn initialize_variable(&mut self, variable_name: &str, line: u32) -> Result<(), Error> {
        let (scope_id, record) = match self.resolve(variable_name) {
            Some((_, _, true)) => return Ok(()),
            Some((id, record, false)) => (id, *record),
            None => return Err(MK_ERROR!(ErrorImpl::VariableNotDeclared { variable: String::from(variable_name) }, line)),
        };

        if record.is_global && !self.is_in_global_scope() {
            trace!(variable = variable_name, "initialized global inside method scope");
            self.scopes[METHOD_DEPTH - 1].declare_variable(variable_name, record, true, line)
        } else {
            self.scopes[scope_id].mark_initialized(variable_name);
            Ok(())
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new()
    }
}
