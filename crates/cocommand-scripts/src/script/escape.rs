//! Escaping for AppleScript double-quoted string literals.

use crate::error::{DispatchError, DispatchResult};

/// Escape a raw value for use inside an AppleScript `"..."` literal.
///
/// Backslashes go first so the escapes added for quotes and control
/// characters are not doubled.
pub fn escape_script_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Render `value` as a complete quoted AppleScript literal.
///
/// NUL cannot be passed to `osascript` through argv, so values containing it
/// are rejected rather than silently truncated.
pub fn script_literal(value: &str) -> DispatchResult<String> {
    if value.contains('\0') {
        return Err(DispatchError::TemplateGeneration(
            "value contains a NUL character".to_string(),
        ));
    }
    Ok(format!("\"{}\"", escape_script_literal(value)))
}
