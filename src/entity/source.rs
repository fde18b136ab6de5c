use std::collections::{HashMap, HashSet};

use crate::entity::types::{Entity, EntityField, FieldValue};
use crate::utils::error::{BoxResult, TocerError};

/// Default entity types treated as recursable containers
pub const DEFAULT_CONTAINER_TYPES: &[&str] = &["paragraph"];

/// Collaborator capabilities the generator consumes. Implementations own
/// the knowledge of how field values become markup, which fields a bundle
/// displays, and which values are nested sub-entities.
pub trait ContentSource {
    /// Render one field value to a markup fragment for the given view mode.
    /// Failures here are non-fatal to a generation run: the generator logs
    /// and treats the value as contributing no headings.
    fn render_field_value(
        &self,
        entity: &Entity,
        field: &EntityField,
        delta: usize,
        view_mode: &str,
    ) -> BoxResult<String>;

    /// Visible field names for `(entity_type, bundle)` in display order, or
    /// `None` when no display configuration exists (natural order applies,
    /// all fields visible).
    fn display_order(&self, entity_type: &str, bundle: &str) -> Option<Vec<String>>;

    /// Resolve a field value to a nested sub-entity eligible for recursive
    /// scanning, or `None` when the value is not such a reference.
    fn resolve_sub_entity<'a>(&self, value: &'a FieldValue) -> Option<&'a Entity>;
}

/// Content source backed by the owned entity tree itself. Text values
/// render to their own content; display orders are registered up front.
/// Used by the CLI and as the test double.
pub struct InMemorySource {
    display_orders: HashMap<(String, String), Vec<String>>,
    container_types: HashSet<String>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self {
            display_orders: HashMap::new(),
            container_types: DEFAULT_CONTAINER_TYPES
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }

    /// Register a display configuration for `(entity_type, bundle)`: the
    /// listed fields, in order, are visible; everything else is hidden.
    pub fn set_display_order(&mut self, entity_type: &str, bundle: &str, fields: Vec<String>) {
        self.display_orders
            .insert((entity_type.to_string(), bundle.to_string()), fields);
    }

    /// Replace the set of entity types recognized as containers
    pub fn set_container_types(&mut self, types: HashSet<String>) {
        self.container_types = types;
    }
}

impl Default for InMemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentSource for InMemorySource {
    fn render_field_value(
        &self,
        entity: &Entity,
        field: &EntityField,
        delta: usize,
        _view_mode: &str,
    ) -> BoxResult<String> {
        match field.values.get(delta).and_then(|v| v.as_text()) {
            Some(text) => Ok(text.to_string()),
            None => Err(TocerError::Render(format!(
                "no renderable value for {}.{}[{}]",
                entity.key(),
                field.name,
                delta
            ))
            .into()),
        }
    }

    fn display_order(&self, entity_type: &str, bundle: &str) -> Option<Vec<String>> {
        self.display_orders
            .get(&(entity_type.to_string(), bundle.to_string()))
            .cloned()
    }

    fn resolve_sub_entity<'a>(&self, value: &'a FieldValue) -> Option<&'a Entity> {
        match value {
            FieldValue::SubEntity(entity) if self.container_types.contains(&entity.entity_type) => {
                Some(entity)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_value() {
        let source = InMemorySource::new();
        let entity = Entity::new("node", "1", "page")
            .with_field(EntityField::new("body", "text_long").with_text("<p>hi</p>"));

        let markup = source
            .render_field_value(&entity, entity.field("body").unwrap(), 0, "full")
            .unwrap();
        assert_eq!(markup, "<p>hi</p>");
    }

    #[test]
    fn test_render_missing_delta_fails() {
        let source = InMemorySource::new();
        let entity =
            Entity::new("node", "1", "page").with_field(EntityField::new("body", "text_long"));

        let result = source.render_field_value(&entity, entity.field("body").unwrap(), 3, "full");
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_sub_entity_respects_container_types() {
        let source = InMemorySource::new();
        let paragraph = FieldValue::SubEntity(Entity::new("paragraph", "7", "section"));
        let node = FieldValue::SubEntity(Entity::new("node", "8", "article"));
        let text = FieldValue::Text("plain".to_string());

        assert!(source.resolve_sub_entity(&paragraph).is_some());
        assert!(source.resolve_sub_entity(&node).is_none());
        assert!(source.resolve_sub_entity(&text).is_none());
    }
}
