use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{DispatchError, DispatchResult};
use crate::script::script_literal;

/// Validated, fully defaulted arguments for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ArgumentRecord {
    values: Map<String, Value>,
}

impl ArgumentRecord {
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    /// String argument by name.
    ///
    /// Validation guarantees required and defaulted parameters are present,
    /// so a miss here means the generator and its schema disagree.
    pub fn str(&self, name: &str) -> DispatchResult<&str> {
        match self.values.get(name) {
            Some(Value::String(value)) => Ok(value),
            Some(_) => Err(DispatchError::TemplateGeneration(format!(
                "argument '{name}' is not a string"
            ))),
            None => Err(DispatchError::TemplateGeneration(format!(
                "missing argument '{name}'"
            ))),
        }
    }

    /// String argument rendered as an escaped, quoted AppleScript literal.
    pub fn literal(&self, name: &str) -> DispatchResult<String> {
        script_literal(self.str(name)?)
    }
}
