use std::collections::HashMap;

use crate::{errors::errors::{Error, ErrorImpl}, MK_ERROR};

use super::symbols::VariableRecord;

/// Index of a scope inside the context's scope arena.
pub type ScopeId = usize;

/// One lexical scope. A name lives in at most one of the two tables.
#[derive(Debug, Default)]
pub struct Scope {
    pub parent: Option<ScopeId>,
    initialized_variables: HashMap<String, VariableRecord>,
    uninitialized_variables: HashMap<String, VariableRecord>,
}

impl Scope {
    pub fn new(parent: Option<ScopeId>) -> Self {
        Scope {
            parent,
            initialized_variables: HashMap::new(),
            uninitialized_variables: HashMap::new(),
        }
    }

    pub fn declare_variable(&mut self, variable_name: &str, record: VariableRecord, is_initialized: bool, line: u32) -> Result<(), Error> {
        if self.declares(variable_name) {
            return Err(MK_ERROR!(ErrorImpl::VariableAlreadyDeclared { variable: String::from(variable_name) }, line));
        }

        if is_initialized {
            self.initialized_variables.insert(String::from(variable_name), record);
        } else {
            self.uninitialized_variables.insert(String::from(variable_name), record);
        }
        Ok(())
    }

    pub fn declares(&self, variable_name: &str) -> bool {
        self.initialized_variables.contains_key(variable_name) || self.uninitialized_variables.contains_key(variable_name)
    }

    /// The record for `variable_name` in this scope only, with its initialization state.
    pub fn get_variable(&self, variable_name: &str) -> Option<(&VariableRecord, bool)> {
        if let Some(record) = self.initialized_variables.get(variable_name) {
            Some((record, true))
        } else {
            self.uninitialized_variables.get(variable_name).map(|record| (record, false))
        }
    }

    /// Moves a variable from the uninitialized table to the initialized one.
    /// Returns false if this scope holds no uninitialized variable of that name.
    pub fn mark_initialized(&mut self, variable_name: &str) -> bool {
        match self.uninitialized_variables.remove_entry(variable_name) {
            Some((name, record)) => {
                self.initialized_variables.insert(name, record);
                true
            }
            None => false,
        }
    }
}
