use std::fmt;
use serde::{Serialize, Deserialize};

/// Identity of a content entity, rendered as `type:id`.
///
/// Used as the cache key for generated tables of contents. Two entity
/// records with the same type and id are the same entity as far as the
/// generator is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityKey(String);

impl EntityKey {
    pub fn new(entity_type: &str, id: &str) -> Self {
        EntityKey(format!("{}:{}", entity_type, id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A content entity: a typed record with a bundle (sub-type) and an
/// ordered set of named fields. Field order in `fields` is the natural
/// declaration order, used when no display configuration exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub entity_type: String,
    pub id: String,
    #[serde(default)]
    pub bundle: String,
    #[serde(default)]
    pub fields: Vec<EntityField>,
}

impl Entity {
    pub fn new(entity_type: &str, id: &str, bundle: &str) -> Self {
        Self {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
            bundle: bundle.to_string(),
            fields: Vec::new(),
        }
    }

    /// Cache key for this entity
    pub fn key(&self) -> EntityKey {
        EntityKey::new(&self.entity_type, &self.id)
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&EntityField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Builder-style helper for assembling fixtures and test trees
    pub fn with_field(mut self, field: EntityField) -> Self {
        self.fields.push(field);
        self
    }
}

/// A named, typed, possibly multi-valued field. The index of a value in
/// `values` is its delta.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityField {
    pub name: String,
    pub field_type: String,
    #[serde(default)]
    pub values: Vec<FieldValue>,
}

impl EntityField {
    pub fn new(name: &str, field_type: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type: field_type.to_string(),
            values: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.values.push(FieldValue::Text(text.to_string()));
        self
    }

    pub fn with_sub_entity(mut self, entity: Entity) -> Self {
        self.values.push(FieldValue::SubEntity(entity));
        self
    }
}

/// One value of a field: either opaque text (rendered to markup by the
/// content source) or a reference to a nested sub-entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    SubEntity(Entity),
}

impl FieldValue {
    /// The raw text of this value, if it is not a sub-entity reference
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::SubEntity(_) => None,
        }
    }
}
