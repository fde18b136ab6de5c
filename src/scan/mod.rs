mod id;
mod text;
mod markup;
mod heading_field;

pub use id::generate_id;
pub use text::{strip_tags, trim_label};
pub use markup::{scan_markup, MarkupScan, MAX_RANK, MIN_RANK};
pub use heading_field::{extract_heading_field, MAX_HEADING_LENGTH};
