//! Built-in script categories.

pub mod notes;

use crate::config::Config;
use crate::error::DispatchResult;
use crate::registry::CategoryRegistry;

/// Registry with every built-in category.
pub fn builtin_registry(config: &Config) -> DispatchResult<CategoryRegistry> {
    let mut registry = CategoryRegistry::new();
    registry.register(notes::category(&config.notes)?)?;
    Ok(registry)
}
