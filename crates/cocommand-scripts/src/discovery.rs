//! Flattened tool listing for function-calling frameworks.

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{DispatchError, DispatchResult};
use crate::registry::{ActionDescriptor, Category, CategoryRegistry};

/// One action as advertised to a tool-calling model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub parameters: Value,
    pub category: String,
    pub action: String,
}

/// Every registered action, in registration order.
pub fn tool_specs(registry: &CategoryRegistry) -> Vec<ToolSpec> {
    registry
        .categories()
        .iter()
        .flat_map(|category| {
            category.actions().iter().map(move |action| ToolSpec {
                name: tool_name(&category.name, &action.name),
                description: action.description.clone(),
                parameters: action
                    .schema
                    .as_ref()
                    .map(|schema| schema.to_json_schema())
                    .unwrap_or_else(|| json!({ "type": "object", "properties": {} })),
                category: category.name.clone(),
                action: action.name.clone(),
            })
        })
        .collect()
}

pub fn tool_name(category: &str, action: &str) -> String {
    sanitize_tool_name(&format!("{category}_{action}"))
}

/// Find the category and action behind a flattened tool name.
pub fn resolve_tool<'a>(
    registry: &'a CategoryRegistry,
    name: &str,
) -> DispatchResult<(&'a Category, &'a ActionDescriptor)> {
    registry
        .categories()
        .iter()
        .flat_map(|category| category.actions().iter().map(move |action| (category, action)))
        .find(|(category, action)| tool_name(&category.name, &action.name) == name)
        .ok_or_else(|| DispatchError::UnknownTool(name.to_string()))
}

fn sanitize_tool_name(name: &str) -> String {
    let mut sanitized = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
            sanitized.push(ch);
        } else {
            sanitized.push('_');
        }
    }
    sanitized
}
