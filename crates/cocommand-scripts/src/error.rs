use std::path::PathBuf;

/// Errors raised while registering, resolving, generating or executing a
/// script command.
///
/// Domain outcomes reported by a generated script (for example
/// "Note 'x' not found") are never errors at this layer; they come back as
/// ordinary successful output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("category already registered: {0}")]
    DuplicateCategory(String),

    #[error("duplicate action '{action}' in category '{category}'")]
    DuplicateAction { category: String, action: String },

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown action '{action}' in category '{category}'")]
    UnknownAction { category: String, action: String },

    #[error("tool name '{tool}' already used by '{existing}'")]
    DuplicateTool { tool: String, existing: String },

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("arguments must be an object, got {actual}")]
    InvalidArguments { actual: String },

    #[error("missing required parameter: '{parameter}'")]
    MissingParameter { parameter: String },

    #[error("parameter '{parameter}' expected {expected}, got {actual}")]
    InvalidParameterType {
        parameter: String,
        expected: String,
        actual: String,
    },

    #[error("unknown parameter: '{parameter}'")]
    UnknownParameter { parameter: String },

    #[error("template generation failed: {0}")]
    TemplateGeneration(String),

    #[error("script execution timed out after {timeout_ms}ms")]
    ExecutionTimeout { timeout_ms: u64 },

    #[error("script execution failed: {0}")]
    ExecutionFailed(String),
}

/// Result type alias using [`DispatchError`].
pub type DispatchResult<T> = Result<T, DispatchError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value for {key}: {value}")]
    InvalidEnv { key: String, value: String },
}
