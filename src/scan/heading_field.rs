use crate::scan::id::generate_id;
use crate::scan::text::trim_label;
use crate::toc::Heading;

/// Longest label a heading field may contribute
pub const MAX_HEADING_LENGTH: usize = 128;

/// Extract a heading from a field whose whole value is the heading.
///
/// The value is treated as plain text, never parsed as markup: trimmed of
/// whitespace and non-breaking spaces, truncated to
/// [`MAX_HEADING_LENGTH`] characters, and always contributed at level 0 —
/// heading fields cannot express nested structure. Returns `None` for a
/// value that trims to nothing.
pub fn extract_heading_field(value: &str) -> Option<Heading> {
    let trimmed = trim_label(value);
    if trimmed.is_empty() {
        return None;
    }

    let label: String = trimmed.chars().take(MAX_HEADING_LENGTH).collect();
    let id = generate_id(&label);
    Some(Heading::new(label, id, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_extraction() {
        let heading = extract_heading_field("  Chapter One  ").unwrap();
        assert_eq!(heading.label, "Chapter One");
        assert_eq!(heading.id, "Chapter-One");
        assert_eq!(heading.level, 0);
    }

    #[test]
    fn test_blank_value_yields_nothing() {
        assert!(extract_heading_field("   ").is_none());
        assert!(extract_heading_field("\u{a0}&nbsp;").is_none());
        assert!(extract_heading_field("").is_none());
    }

    #[test]
    fn test_truncation_to_128_characters() {
        let long: String = std::iter::repeat('a').take(200).collect();
        let heading = extract_heading_field(&long).unwrap();
        assert_eq!(heading.label.chars().count(), MAX_HEADING_LENGTH);
        assert_eq!(heading.label, long[..MAX_HEADING_LENGTH]);
    }

    #[test]
    fn test_id_derived_from_truncated_label() {
        // The id comes from the label after truncation, not the raw value
        let mut value: String = std::iter::repeat('x').take(MAX_HEADING_LENGTH).collect();
        value.push_str(" trailing words");
        let heading = extract_heading_field(&value).unwrap();
        assert_eq!(heading.id, heading.label);
    }
}
