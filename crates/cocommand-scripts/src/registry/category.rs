use std::collections::HashSet;

use crate::error::{DispatchError, DispatchResult};

use super::action::{ActionDescriptor, ActionInfo};

/// Named group of related actions.
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub description: String,
    actions: Vec<ActionDescriptor>,
}

impl Category {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: ActionDescriptor) -> Self {
        self.actions.push(action);
        self
    }

    pub fn actions(&self) -> &[ActionDescriptor] {
        &self.actions
    }

    pub fn lookup_action(&self, action: &str) -> DispatchResult<&ActionDescriptor> {
        self.actions
            .iter()
            .find(|descriptor| descriptor.name == action)
            .ok_or_else(|| DispatchError::UnknownAction {
                category: self.name.clone(),
                action: action.to_string(),
            })
    }

    pub fn list_actions(&self) -> Vec<ActionInfo> {
        self.actions.iter().map(ActionDescriptor::info).collect()
    }

    /// Reject categories that declare the same action name twice.
    pub(crate) fn check_unique_actions(&self) -> DispatchResult<()> {
        let mut seen = HashSet::new();
        for action in &self.actions {
            if !seen.insert(action.name.as_str()) {
                return Err(DispatchError::DuplicateAction {
                    category: self.name.clone(),
                    action: action.name.clone(),
                });
            }
        }
        Ok(())
    }
}
