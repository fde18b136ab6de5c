use serde::{Serialize, Deserialize};

use crate::entity::EntityKey;
use crate::toc::builder::build_outline;

/// One discovered heading: a label, its anchor id, and its outline level.
/// Level 0 is the shallowest recognized rank (h2 in markup scans; heading
/// fields always contribute at level 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub label: String,
    pub id: String,
    pub level: usize,
}

impl Heading {
    pub fn new(label: String, id: String, level: usize) -> Self {
        Self { label, id, level }
    }
}

/// A node of the nested outline: a heading plus the headings that follow
/// it at strictly deeper levels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    pub label: String,
    pub id: String,
    pub level: usize,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new(heading: &Heading) -> Self {
        Self {
            label: heading.label.clone(),
            id: heading.id.clone(),
            level: heading.level,
            children: Vec::new(),
        }
    }
}

/// Replacement content recorded for a scanned field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewriteContent {
    /// Full markup fragment with anchors injected
    Markup(String),
    /// Anchor id for a heading field; the presentation layer anchors the
    /// field with this id without substituting its content
    AnchorId(String),
}

/// A recorded substitution for one field value, so anchors injected
/// during the scan survive into final presentation without re-scanning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRewrite {
    pub entity_key: EntityKey,
    pub field_name: String,
    pub delta: usize,
    pub content: RewriteContent,
}

/// The result of one generation run over an entity tree: the flat heading
/// sequence in discovery order, the recorded field rewrites, and the
/// root entity the walk started from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableOfContents {
    root_key: EntityKey,
    is_relative: bool,
    headings: Vec<Heading>,
    rewrites: Vec<FieldRewrite>,
}

impl TableOfContents {
    pub fn new(root_key: EntityKey, is_relative: bool) -> Self {
        Self {
            root_key,
            is_relative,
            headings: Vec::new(),
            rewrites: Vec::new(),
        }
    }

    /// Append a discovered heading
    pub fn add_heading(&mut self, heading: Heading) {
        self.headings.push(heading);
    }

    /// Record a field rewrite
    pub fn add_rewrite(&mut self, rewrite: FieldRewrite) {
        self.rewrites.push(rewrite);
    }

    /// Fold the flat heading sequence into the nested outline forest
    pub fn to_outline(&self) -> Vec<OutlineNode> {
        build_outline(&self.headings)
    }

    /// Discovered headings in traversal order
    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    /// Recorded rewrites in traversal order
    pub fn rewrites(&self) -> &[FieldRewrite] {
        &self.rewrites
    }

    pub fn root_key(&self) -> &EntityKey {
        &self.root_key
    }

    pub fn is_relative(&self) -> bool {
        self.is_relative
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }
}
