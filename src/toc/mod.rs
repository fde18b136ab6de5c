mod types;
mod builder;
mod render;

pub use types::{FieldRewrite, Heading, OutlineNode, RewriteContent, TableOfContents};
pub use builder::build_outline;
pub use render::render_html;
