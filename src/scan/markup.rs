use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::scan::id::generate_id;
use crate::scan::text::{strip_tags, trim_label};
use crate::toc::Heading;

/// Shallowest heading rank recognized; h1 is reserved for page titles
pub const MIN_RANK: usize = 2;
/// Deepest heading rank recognized; h5 and below are invisible to the outline
pub const MAX_RANK: usize = 4;

lazy_static! {
    // A heading element at rank 2-4, optionally preceded by an anchor a
    // previous scan injected. Matching the anchor here is what keeps
    // re-scans from stacking a second anchor onto the same heading.
    static ref HEADING_REGEX: Regex = Regex::new(
        r#"(?is)(?:<a id="([^"]+)"></a>\s*)?<h([2-4])\b([^>]*)>(.*?)</h[2-4]\s*>"#
    ).unwrap();

    static ref ID_ATTR_REGEX: Regex =
        Regex::new(r#"(?i)\bid\s*=\s*["']([^"']+)["']"#).unwrap();
}

/// Outcome of scanning one rendered markup fragment
#[derive(Debug, Clone)]
pub struct MarkupScan {
    /// Headings in document order, levels 0..=2 for ranks h2..=h4
    pub headings: Vec<Heading>,
    /// The fragment with anchors injected; `None` when no heading was
    /// found and the original markup should be used unchanged
    pub rewritten: Option<String>,
}

/// Scan a markup fragment for headings at ranks 2 through 4 and ensure
/// every non-empty heading has an anchor.
///
/// For each heading in document order: the label is the element's text
/// content trimmed of whitespace and non-breaking spaces, and headings
/// with an empty label are skipped without touching the fragment. The
/// anchor id is the element's own `id` attribute when it has one, or the
/// id of an anchor injected by an earlier scan; otherwise an id is
/// derived from the label and a zero-width anchor carrying it is
/// injected immediately before the element.
pub fn scan_markup(fragment: &str) -> MarkupScan {
    let mut headings: Vec<Heading> = Vec::new();

    let rewritten = HEADING_REGEX.replace_all(fragment, |caps: &Captures| {
        let rank: usize = caps[2].parse().unwrap_or(MIN_RANK);
        let text = strip_tags(&caps[4]);
        let label = trim_label(&text);
        if label.is_empty() {
            return caps[0].to_string();
        }
        let level = rank - MIN_RANK;

        // Existing id attribute wins and is reused verbatim
        if let Some(attr) = ID_ATTR_REGEX.captures(&caps[3]) {
            headings.push(Heading::new(label.to_string(), attr[1].to_string(), level));
            return caps[0].to_string();
        }

        // Anchor injected by a previous scan of this fragment
        if let Some(anchor_id) = caps.get(1) {
            headings.push(Heading::new(
                label.to_string(),
                anchor_id.as_str().to_string(),
                level,
            ));
            return caps[0].to_string();
        }

        let id = generate_id(label);
        headings.push(Heading::new(label.to_string(), id.clone(), level));
        format!("<a id=\"{}\"></a>{}", id, &caps[0])
    });

    let rewritten = if headings.is_empty() {
        None
    } else {
        Some(rewritten.into_owned())
    };

    MarkupScan { headings, rewritten }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_boundaries() {
        let scan = scan_markup("<h1>Title</h1><h2>Two</h2><h3>Three</h3><h4>Four</h4><h5>Five</h5>");

        let found: Vec<(&str, usize)> = scan
            .headings
            .iter()
            .map(|h| (h.label.as_str(), h.level))
            .collect();
        assert_eq!(found, vec![("Two", 0), ("Three", 1), ("Four", 2)]);
    }

    #[test]
    fn test_anchor_injection() {
        let scan = scan_markup("<h2>Getting Started</h2><p>x</p>");

        assert_eq!(scan.headings.len(), 1);
        assert_eq!(scan.headings[0].id, "Getting-Started");
        let rewritten = scan.rewritten.unwrap();
        assert!(rewritten.starts_with("<a id=\"Getting-Started\"></a><h2>Getting Started</h2>"));
    }

    #[test]
    fn test_existing_id_attribute_reused_without_injection() {
        let fragment = "<h2 id=\"custom\">Intro</h2>";
        let scan = scan_markup(fragment);

        assert_eq!(scan.headings[0].id, "custom");
        assert_eq!(scan.rewritten.unwrap(), fragment);
    }

    #[test]
    fn test_rescan_is_idempotent() {
        let first = scan_markup("<h2>Intro</h2><h3>Details</h3>");
        let once = first.rewritten.unwrap();

        let second = scan_markup(&once);
        assert_eq!(second.headings, first.headings);
        assert_eq!(second.rewritten.unwrap(), once);
    }

    #[test]
    fn test_empty_and_nbsp_labels_skipped() {
        let scan = scan_markup("<h2> </h2><h2>\u{a0}</h2><h2>&nbsp;</h2><h3>Real</h3>");

        assert_eq!(scan.headings.len(), 1);
        assert_eq!(scan.headings[0].label, "Real");
        // Skipped headings leave the markup untouched
        assert!(scan.rewritten.unwrap().contains("<h2> </h2>"));
    }

    #[test]
    fn test_no_headings_means_no_rewrite() {
        let scan = scan_markup("<p>just a paragraph</p>");
        assert!(scan.headings.is_empty());
        assert!(scan.rewritten.is_none());
    }

    #[test]
    fn test_inline_markup_stripped_from_label() {
        let scan = scan_markup("<h2><em>Deep</em> dive</h2>");
        assert_eq!(scan.headings[0].label, "Deep dive");
        assert_eq!(scan.headings[0].id, "Deep-dive");
    }

    #[test]
    fn test_nested_heading_matched_regardless_of_ancestry() {
        let scan = scan_markup("<div><section><h3>Nested</h3></section></div>");
        assert_eq!(scan.headings.len(), 1);
        assert_eq!(scan.headings[0].level, 1);
    }

    #[test]
    fn test_duplicate_labels_share_an_id() {
        // Collisions are documented behavior, not deduplicated
        let scan = scan_markup("<h2>Overview</h2><h2>Overview</h2>");
        assert_eq!(scan.headings[0].id, "Overview");
        assert_eq!(scan.headings[1].id, "Overview");
    }
}
