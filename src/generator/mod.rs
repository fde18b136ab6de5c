mod engine;
mod cache;

pub use engine::{GenerationEngine, SCAN_VIEW_MODE, TOC_FIELD_TYPE};
pub use cache::TocCache;
