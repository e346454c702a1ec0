//! Script templates: either fixed text or a generator over validated args.

use std::fmt;
use std::sync::Arc;

use crate::error::DispatchResult;
use crate::schema::ArgumentRecord;

/// Generator type: takes a fully defaulted argument record, returns script text.
pub type ScriptGenerator = Arc<dyn Fn(&ArgumentRecord) -> DispatchResult<String> + Send + Sync>;

#[derive(Clone)]
pub enum ScriptTemplate {
    /// Fixed script text; arguments are ignored.
    Constant(String),
    /// Script text produced from the argument record.
    Parameterized(ScriptGenerator),
}

impl ScriptTemplate {
    pub fn constant(text: impl Into<String>) -> Self {
        Self::Constant(text.into())
    }

    pub fn parameterized<F>(generator: F) -> Self
    where
        F: Fn(&ArgumentRecord) -> DispatchResult<String> + Send + Sync + 'static,
    {
        Self::Parameterized(Arc::new(generator))
    }

    pub fn render(&self, args: &ArgumentRecord) -> DispatchResult<String> {
        match self {
            ScriptTemplate::Constant(text) => Ok(text.clone()),
            ScriptTemplate::Parameterized(generator) => generator(args),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ScriptTemplate::Constant(_) => "constant",
            ScriptTemplate::Parameterized(_) => "parameterized",
        }
    }

    /// The fixed text of a constant template.
    pub fn constant_text(&self) -> Option<&str> {
        match self {
            ScriptTemplate::Constant(text) => Some(text),
            ScriptTemplate::Parameterized(_) => None,
        }
    }
}

impl fmt::Debug for ScriptTemplate {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptTemplate::Constant(text) => {
                formatter.debug_tuple("Constant").field(text).finish()
            }
            ScriptTemplate::Parameterized(_) => formatter.write_str("Parameterized(..)"),
        }
    }
}
