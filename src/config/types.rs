use std::collections::HashSet;
use serde::{Serialize, Deserialize};

use crate::config::defaults;
use crate::utils::error::TocerError;

/// Per-generation settings as supplied by the host (settings file, UI,
/// persistent store). Heading fields arrive as raw `type:bundle:field`
/// specifiers and are validated by [`TocSettings::resolve`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocSettings {
    /// Field types whose rendered markup is scanned for headings
    #[serde(default = "defaults::default_field_types")]
    pub field_types: HashSet<String>,

    /// `type:bundle:field` specifiers of fields whose whole value is a
    /// heading rather than markup to scan
    #[serde(default)]
    pub heading_fields: Vec<String>,

    /// Whether to recurse into referenced sub-entities
    #[serde(default = "defaults::default_scan_sub_entities")]
    pub scan_sub_entities: bool,

    /// Whether generated links are same-page anchors or cross-page
    #[serde(default = "defaults::default_is_relative")]
    pub is_relative: bool,
}

impl Default for TocSettings {
    fn default() -> Self {
        Self {
            field_types: defaults::default_field_types(),
            heading_fields: Vec::new(),
            scan_sub_entities: defaults::default_scan_sub_entities(),
            is_relative: defaults::default_is_relative(),
        }
    }
}

impl TocSettings {
    /// Validate and normalize into the form the generator consumes.
    /// Fails fast on a malformed heading-field specifier so a bad
    /// configuration never makes it into a traversal.
    pub fn resolve(&self) -> Result<ResolvedSettings, TocerError> {
        let mut heading_fields = HashSet::new();

        for spec in &self.heading_fields {
            let parts: Vec<&str> = spec.split(':').collect();
            match parts.as_slice() {
                [entity_type, bundle, field]
                    if !entity_type.is_empty() && !bundle.is_empty() && !field.is_empty() =>
                {
                    heading_fields.insert((
                        entity_type.to_string(),
                        bundle.to_string(),
                        field.to_string(),
                    ));
                }
                _ => {
                    return Err(TocerError::Config(format!(
                        "heading field specifier '{}' is not of the form type:bundle:field",
                        spec
                    )));
                }
            }
        }

        Ok(ResolvedSettings {
            field_types: self.field_types.clone(),
            heading_fields,
            scan_sub_entities: self.scan_sub_entities,
            is_relative: self.is_relative,
        })
    }
}

/// Normalized settings: heading-field specifiers parsed into triples
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    pub field_types: HashSet<String>,
    pub heading_fields: HashSet<(String, String, String)>,
    pub scan_sub_entities: bool,
    pub is_relative: bool,
}

impl ResolvedSettings {
    /// Whether `(entity_type, bundle, field)` is configured as a heading field
    pub fn is_heading_field(&self, entity_type: &str, bundle: &str, field: &str) -> bool {
        self.heading_fields.contains(&(
            entity_type.to_string(),
            bundle.to_string(),
            field.to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = TocSettings::default();
        assert!(settings.field_types.contains("text_long"));
        assert!(settings.field_types.contains("text_with_summary"));
        assert_eq!(settings.field_types.len(), 2);
        assert!(settings.heading_fields.is_empty());
        assert!(settings.scan_sub_entities);
        assert!(!settings.is_relative);
    }

    #[test]
    fn test_defaults_apply_to_empty_yaml() {
        let settings: TocSettings = serde_yaml::from_str("{}").unwrap();
        assert!(settings.scan_sub_entities);
        assert!(settings.field_types.contains("text_long"));
    }

    #[test]
    fn test_resolve_heading_field_triples() {
        let settings = TocSettings {
            heading_fields: vec!["node:article:field_title".to_string()],
            ..Default::default()
        };

        let resolved = settings.resolve().unwrap();
        assert!(resolved.is_heading_field("node", "article", "field_title"));
        assert!(!resolved.is_heading_field("node", "page", "field_title"));
    }

    #[test]
    fn test_resolve_rejects_malformed_specifier() {
        for bad in ["node:article", "a:b:c:d", "::", "node::field"] {
            let settings = TocSettings {
                heading_fields: vec![bad.to_string()],
                ..Default::default()
            };
            let err = settings.resolve().unwrap_err();
            assert!(matches!(err, TocerError::Config(_)), "accepted '{}'", bad);
        }
    }
}
