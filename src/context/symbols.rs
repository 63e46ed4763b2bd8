use super::types::VariableType;

/// What is known about a declared variable. Whether it currently holds a
/// value is tracked by the scope it lives in, not by the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableRecord {
    pub var_type: VariableType,
    pub is_final: bool,
    pub is_global: bool,
}

impl VariableRecord {
    pub fn new(var_type: VariableType, is_final: bool, is_global: bool) -> Self {
        VariableRecord {
            var_type,
            is_final,
            is_global,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub var_type: VariableType,
    pub is_final: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: String,
    pub parameters: Vec<Parameter>,
}

impl MethodSignature {
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}
