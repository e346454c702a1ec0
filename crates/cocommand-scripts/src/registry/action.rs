use serde::Serialize;
use serde_json::Value;

use crate::error::DispatchResult;
use crate::schema::{ArgumentRecord, ParamSchema};
use crate::script::ScriptTemplate;

/// One named operation: description, parameter contract and template.
#[derive(Debug, Clone)]
pub struct ActionDescriptor {
    pub name: String,
    pub description: String,
    /// `None` means the action takes no parameters.
    pub schema: Option<ParamSchema>,
    pub template: ScriptTemplate,
}

impl ActionDescriptor {
    /// A parameterless action with fixed script text.
    pub fn constant(
        name: impl Into<String>,
        description: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schema: None,
            template: ScriptTemplate::constant(script),
        }
    }

    pub fn parameterized<F>(
        name: impl Into<String>,
        description: impl Into<String>,
        schema: ParamSchema,
        generator: F,
    ) -> Self
    where
        F: Fn(&ArgumentRecord) -> DispatchResult<String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            schema: Some(schema),
            template: ScriptTemplate::parameterized(generator),
        }
    }

    /// Validate and default raw arguments.
    ///
    /// Actions without a schema ignore their input entirely.
    pub fn bind(&self, raw: &Value) -> DispatchResult<ArgumentRecord> {
        match &self.schema {
            Some(schema) => schema.validate(raw),
            None => Ok(ArgumentRecord::default()),
        }
    }

    pub fn info(&self) -> ActionInfo {
        ActionInfo {
            name: self.name.clone(),
            description: self.description.clone(),
            schema: self.schema.as_ref().map(ParamSchema::to_json_schema),
            template: self.template.kind(),
        }
    }
}

/// Discovery view of an action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionInfo {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
    pub template: &'static str,
}
