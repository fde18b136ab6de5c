use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Strip markup tags from a fragment, leaving its text content
pub fn strip_tags(fragment: &str) -> String {
    TAG_REGEX.replace_all(fragment, "").into_owned()
}

/// Trim whitespace and non-breaking spaces (both the `\u{a0}` character
/// and the `&nbsp;` entity) from both ends of a label.
pub fn trim_label(text: &str) -> &str {
    let mut current = text;
    loop {
        let trimmed = current
            .trim_matches(|c: char| c.is_whitespace() || c == '\u{a0}')
            .trim_start_matches("&nbsp;")
            .trim_end_matches("&nbsp;");
        if trimmed == current {
            return current;
        }
        current = trimmed;
    }
}
