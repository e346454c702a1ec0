//! Schema-described AppleScript commands for tool-calling agents.
//!
//! Categories of actions are registered once at startup. The [`Dispatcher`]
//! validates caller arguments against an action's parameter schema, renders
//! its script with every string value escaped, and hands the text to a
//! [`ScriptExecutor`].

pub mod categories;
pub mod config;
pub mod discovery;
pub mod dispatch;
pub mod error;
pub mod executor;
pub mod registry;
pub mod schema;
pub mod script;

pub use crate::categories::builtin_registry;
pub use crate::config::{Config, ExecutorConfig, NotesConfig};
pub use crate::discovery::{tool_specs, ToolSpec};
pub use crate::dispatch::{Dispatcher, ExecutionRequest};
pub use crate::error::{ConfigError, DispatchError, DispatchResult};
pub use crate::executor::{InvocationResult, OsascriptExecutor, ScriptExecutor};
pub use crate::registry::{ActionDescriptor, ActionInfo, Category, CategoryRegistry};
pub use crate::schema::{ArgumentRecord, ParamKind, ParamSchema, ParamSpec};
pub use crate::script::{escape_script_literal, ScriptTemplate};
