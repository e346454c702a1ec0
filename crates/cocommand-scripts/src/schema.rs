//! Parameter schemas and argument validation.
//!
//! A schema is an ordered list of [`ParamSpec`]s. Validation turns a raw JSON
//! argument object into a fully defaulted [`ArgumentRecord`] before any
//! generator runs.

pub mod arguments;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::{DispatchError, DispatchResult};

pub use arguments::ArgumentRecord;

/// Semantic type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    String,
    Integer,
    Number,
    Boolean,
}

impl ParamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Integer => "integer",
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
        }
    }

    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ParamKind::String => value.is_string(),
            ParamKind::Integer => value.is_i64() || value.is_u64(),
            ParamKind::Number => value.is_number(),
            ParamKind::Boolean => value.is_boolean(),
        }
    }
}

/// Declaration of a single parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    pub kind: ParamKind,
    pub description: String,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, kind: ParamKind, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
            required: false,
            default: None,
        }
    }

    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, ParamKind::String, description)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// `null` never counts as supplied. An empty string doesn't either when
    /// the parameter has a default to fall back on.
    fn is_absent(&self, value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::String(text) => text.is_empty() && self.default.is_some(),
            _ => false,
        }
    }
}

/// Ordered parameter list for one action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamSchema {
    params: Vec<ParamSpec>,
}

impl ParamSchema {
    pub fn new(params: Vec<ParamSpec>) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    pub fn get(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|param| param.name == name)
    }

    /// Validate and default a raw argument value.
    ///
    /// `null` stands for an empty object. A `null` field counts as absent, as
    /// does an empty string given for a parameter with a default.
    pub fn validate(&self, raw: &Value) -> DispatchResult<ArgumentRecord> {
        let empty = Map::new();
        let input = match raw {
            Value::Null => &empty,
            Value::Object(map) => map,
            other => {
                return Err(DispatchError::InvalidArguments {
                    actual: json_type_name(other).to_string(),
                })
            }
        };

        let mut record = ArgumentRecord::default();
        for param in &self.params {
            match input.get(&param.name).filter(|value| !param.is_absent(value)) {
                Some(value) => {
                    if !param.kind.matches(value) {
                        return Err(DispatchError::InvalidParameterType {
                            parameter: param.name.clone(),
                            expected: param.kind.as_str().to_string(),
                            actual: json_type_name(value).to_string(),
                        });
                    }
                    record.insert(param.name.clone(), value.clone());
                }
                None if param.required => {
                    return Err(DispatchError::MissingParameter {
                        parameter: param.name.clone(),
                    });
                }
                None => {
                    if let Some(default) = &param.default {
                        record.insert(param.name.clone(), default.clone());
                    }
                }
            }
        }

        if let Some(unknown) = input.keys().find(|key| self.get(key).is_none()) {
            return Err(DispatchError::UnknownParameter {
                parameter: unknown.clone(),
            });
        }

        Ok(record)
    }

    /// Render as the JSON Schema object advertised to tool-calling frameworks.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        for param in &self.params {
            let mut property = json!({
                "type": param.kind.as_str(),
                "description": param.description,
            });
            if let Some(default) = &param.default {
                property["default"] = default.clone();
            }
            properties.insert(param.name.clone(), property);
        }

        let mut schema = json!({
            "type": "object",
            "properties": properties,
        });
        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|param| param.required)
            .map(|param| param.name.as_str())
            .collect();
        if !required.is_empty() {
            schema["required"] = json!(required);
        }
        schema
    }
}

/// Returns a human-readable name for the JSON type of a value.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "number"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
