//! Recursive heading extraction and table-of-contents generation for
//! trees of structured content entities.
//!
//! The generator walks an entity and its nested sub-entities in
//! field-display order, scans rendered markup for `h2`-`h4` headings,
//! injects stable anchors at the discovered locations, and folds the
//! discovered headings into a nested outline by level. Results are
//! cached per entity identity; sub-entities share their ancestor's
//! finished table of contents.

pub mod cli;
pub mod config;
pub mod entity;
pub mod generator;
pub mod scan;
pub mod toc;
pub mod utils;

pub use config::TocSettings;
pub use entity::{ContentSource, Entity, EntityField, EntityKey, FieldValue, InMemorySource};
pub use generator::{GenerationEngine, TocCache};
pub use toc::{FieldRewrite, Heading, OutlineNode, RewriteContent, TableOfContents};
pub use utils::error::{BoxResult, TocerError};
