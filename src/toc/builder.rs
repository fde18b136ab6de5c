use crate::toc::types::{Heading, OutlineNode};

/// Fold a flat, ordered heading sequence into a forest by level.
///
/// Standard heading-stack nesting: a heading becomes a child of the
/// nearest preceding heading with a strictly smaller level, and a new
/// top-level root otherwise. The hierarchy is driven purely by the
/// numeric levels, not by source markup ancestry, so a level-0 entry
/// always resets nesting to the root even mid-sequence.
pub fn build_outline(headings: &[Heading]) -> Vec<OutlineNode> {
    let mut roots: Vec<OutlineNode> = Vec::new();
    let mut stack: Vec<OutlineNode> = Vec::new();

    for heading in headings {
        while stack.last().map_or(false, |top| top.level >= heading.level) {
            attach(&mut stack, &mut roots);
        }
        stack.push(OutlineNode::new(heading));
    }

    while !stack.is_empty() {
        attach(&mut stack, &mut roots);
    }

    roots
}

/// Pop the deepest open node and hand it to its parent, or to the root
/// list when the stack empties
fn attach(stack: &mut Vec<OutlineNode>, roots: &mut Vec<OutlineNode>) {
    if let Some(completed) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.children.push(completed),
            None => roots.push(completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(label: &str, level: usize) -> Heading {
        Heading::new(label.to_string(), label.to_string(), level)
    }

    #[test]
    fn test_empty_sequence_yields_empty_forest() {
        assert!(build_outline(&[]).is_empty());
    }

    #[test]
    fn test_simple_nesting() {
        let outline = build_outline(&[
            heading("Intro", 0),
            heading("Details", 1),
        ]);

        assert_eq!(outline.len(), 1);
        assert_eq!(outline[0].label, "Intro");
        assert_eq!(outline[0].children.len(), 1);
        assert_eq!(outline[0].children[0].label, "Details");
        assert!(outline[0].children[0].children.is_empty());
    }

    #[test]
    fn test_children_are_strictly_deeper() {
        let outline = build_outline(&[
            heading("A", 0),
            heading("B", 1),
            heading("C", 2),
            heading("D", 1),
            heading("E", 0),
        ]);

        assert_eq!(outline.len(), 2);
        let a = &outline[0];
        assert_eq!(a.children.len(), 2);
        assert_eq!(a.children[0].label, "B");
        assert_eq!(a.children[0].children[0].label, "C");
        assert_eq!(a.children[1].label, "D");
        assert_eq!(outline[1].label, "E");

        fn check(node: &OutlineNode) {
            for child in &node.children {
                assert!(child.level > node.level);
                check(child);
            }
        }
        for root in &outline {
            check(root);
        }
    }

    #[test]
    fn test_level_zero_resets_to_root() {
        let outline = build_outline(&[
            heading("A", 0),
            heading("B", 2),
            heading("C", 0),
        ]);

        assert_eq!(outline.len(), 2);
        assert_eq!(outline[0].label, "A");
        assert_eq!(outline[1].label, "C");
        assert!(outline[1].children.is_empty());
    }

    #[test]
    fn test_sibling_at_same_level_closes_previous() {
        let outline = build_outline(&[
            heading("A", 1),
            heading("B", 1),
        ]);

        assert_eq!(outline.len(), 2);
        assert!(outline[0].children.is_empty());
    }

    #[test]
    fn test_deep_start_becomes_root() {
        // A sequence that opens at a deep level still produces roots
        let outline = build_outline(&[
            heading("Deep", 2),
            heading("Top", 0),
        ]);

        assert_eq!(outline.len(), 2);
        assert_eq!(outline[0].label, "Deep");
        assert_eq!(outline[1].label, "Top");
    }
}
