mod types;
mod source;

pub use types::{Entity, EntityField, EntityKey, FieldValue};
pub use source::{ContentSource, InMemorySource, DEFAULT_CONTAINER_TYPES};
