use std::collections::HashSet;

/// Field types scanned for embedded headings when none are configured
pub fn default_field_types() -> HashSet<String> {
    ["text_long", "text_with_summary"]
        .iter()
        .map(|t| t.to_string())
        .collect()
}

pub fn default_scan_sub_entities() -> bool {
    true
}

pub fn default_is_relative() -> bool {
    false
}
