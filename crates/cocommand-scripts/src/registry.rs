//! Category registry for script commands.

pub mod action;
pub mod category;

use std::collections::HashMap;

use crate::discovery::tool_name;
use crate::error::{DispatchError, DispatchResult};

pub use action::{ActionDescriptor, ActionInfo};
pub use category::Category;

/// Registry of categories, populated at startup and read-only afterwards.
///
/// Categories keep registration order for discovery.
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, category: Category) -> DispatchResult<()> {
        if self.index.contains_key(&category.name) {
            return Err(DispatchError::DuplicateCategory(category.name));
        }
        category.check_unique_actions()?;
        self.check_unique_tools(&category)?;
        tracing::debug!(
            category = %category.name,
            actions = category.actions().len(),
            "registered script category"
        );
        self.index.insert(category.name.clone(), self.categories.len());
        self.categories.push(category);
        Ok(())
    }

    /// Every flattened tool name maps to exactly one registered action.
    fn check_unique_tools(&self, category: &Category) -> DispatchResult<()> {
        let mut seen: HashMap<String, String> = self
            .categories
            .iter()
            .flat_map(|existing| {
                existing.actions().iter().map(move |action| {
                    (
                        tool_name(&existing.name, &action.name),
                        format!("{}/{}", existing.name, action.name),
                    )
                })
            })
            .collect();

        for action in category.actions() {
            let tool = tool_name(&category.name, &action.name);
            let owner = format!("{}/{}", category.name, action.name);
            if let Some(existing) = seen.insert(tool.clone(), owner) {
                return Err(DispatchError::DuplicateTool { tool, existing });
            }
        }
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> DispatchResult<&Category> {
        self.index
            .get(name)
            .map(|&position| &self.categories[position])
            .ok_or_else(|| DispatchError::UnknownCategory(name.to_string()))
    }

    pub fn lookup_action(&self, category: &str, action: &str) -> DispatchResult<&ActionDescriptor> {
        self.lookup(category)?.lookup_action(action)
    }

    /// `(name, description)` pairs in registration order.
    pub fn list_categories(&self) -> Vec<(&str, &str)> {
        self.categories
            .iter()
            .map(|category| (category.name.as_str(), category.description.as_str()))
            .collect()
    }

    pub fn list_actions(&self, category: &str) -> DispatchResult<Vec<ActionInfo>> {
        Ok(self.lookup(category)?.list_actions())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_category(name: &str, actions: &[&str]) -> Category {
        actions.iter().fold(
            Category::new(name, format!("{name} operations")),
            |category, action| {
                category.with_action(ActionDescriptor::constant(
                    *action,
                    format!("{action} action"),
                    format!("return \"{action}\""),
                ))
            },
        )
    }

    #[test]
    fn empty_registry() {
        let registry = CategoryRegistry::new();
        assert_eq!(registry.category_count(), 0);
        assert!(registry.list_categories().is_empty());
        assert!(matches!(
            registry.lookup("notes"),
            Err(DispatchError::UnknownCategory(_))
        ));
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = CategoryRegistry::new();
        registry.register(make_category("notes", &["list"])).unwrap();
        registry.register(make_category("mail", &["send"])).unwrap();

        assert_eq!(registry.lookup("notes").unwrap().name, "notes");
        assert_eq!(registry.lookup("mail").unwrap().name, "mail");
        assert_eq!(
            registry.lookup("calendar").unwrap_err(),
            DispatchError::UnknownCategory("calendar".to_string())
        );
    }

    #[test]
    fn list_categories_keeps_registration_order() {
        let mut registry = CategoryRegistry::new();
        registry.register(make_category("zeta", &[])).unwrap();
        registry.register(make_category("alpha", &[])).unwrap();

        assert_eq!(
            registry.list_categories(),
            vec![("zeta", "zeta operations"), ("alpha", "alpha operations")]
        );
    }

    #[test]
    fn duplicate_category_is_rejected() {
        let mut registry = CategoryRegistry::new();
        registry.register(make_category("notes", &["list"])).unwrap();
        let result = registry.register(make_category("notes", &["read"]));

        assert_eq!(
            result.unwrap_err(),
            DispatchError::DuplicateCategory("notes".to_string())
        );
        assert_eq!(registry.category_count(), 1);
        assert!(registry.lookup_action("notes", "list").is_ok());
    }

    #[test]
    fn duplicate_action_is_rejected() {
        let mut registry = CategoryRegistry::new();
        let result = registry.register(make_category("notes", &["list", "list"]));

        assert_eq!(
            result.unwrap_err(),
            DispatchError::DuplicateAction {
                category: "notes".to_string(),
                action: "list".to_string(),
            }
        );
        assert_eq!(registry.category_count(), 0);
    }

    #[test]
    fn colliding_tool_names_are_rejected() {
        let mut registry = CategoryRegistry::new();
        registry
            .register(make_category("notes", &["list_folders"]))
            .unwrap();
        let result = registry.register(make_category("notes_list", &["folders"]));

        assert_eq!(
            result.unwrap_err(),
            DispatchError::DuplicateTool {
                tool: "notes_list_folders".to_string(),
                existing: "notes/list_folders".to_string(),
            }
        );
        assert_eq!(registry.category_count(), 1);
        assert!(registry.lookup("notes_list").is_err());
    }

    #[test]
    fn colliding_tool_names_within_category_are_rejected() {
        let mut registry = CategoryRegistry::new();
        let result = registry.register(make_category("mail", &["send now", "send_now"]));

        assert_eq!(
            result.unwrap_err(),
            DispatchError::DuplicateTool {
                tool: "mail_send_now".to_string(),
                existing: "mail/send now".to_string(),
            }
        );
        assert_eq!(registry.category_count(), 0);
    }

    #[test]
    fn lookup_action_resolves_unique_name() {
        let mut registry = CategoryRegistry::new();
        registry
            .register(make_category("notes", &["list", "read"]))
            .unwrap();

        let action = registry.lookup_action("notes", "read").unwrap();
        assert_eq!(action.name, "read");
        assert_eq!(
            registry.lookup_action("notes", "archive").unwrap_err(),
            DispatchError::UnknownAction {
                category: "notes".to_string(),
                action: "archive".to_string(),
            }
        );
    }

    #[test]
    fn list_actions_for_category() {
        let mut registry = CategoryRegistry::new();
        registry
            .register(make_category("notes", &["list", "read"]))
            .unwrap();

        let names: Vec<String> = registry
            .list_actions("notes")
            .unwrap()
            .into_iter()
            .map(|info| info.name)
            .collect();
        assert_eq!(names, vec!["list", "read"]);
        assert!(registry.list_actions("mail").is_err());
    }
}
