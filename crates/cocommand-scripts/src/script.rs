//! AppleScript text generation: literal escaping and script templates.

pub mod escape;
pub mod template;

pub use escape::{escape_script_literal, script_literal};
pub use template::{ScriptGenerator, ScriptTemplate};
