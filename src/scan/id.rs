use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ID_RUN: Regex = Regex::new(r"[^A-Za-z0-9.]+").unwrap();
}

/// Derive a stable anchor id from a heading label: every maximal run of
/// characters other than ASCII letters, digits and `.` collapses to a
/// single `-`. Deterministic, no uniqueness guarantee across labels —
/// distinct headings with similar text can share an id.
pub fn generate_id(label: &str) -> String {
    NON_ID_RUN.replace_all(label, "-").into_owned()
}
