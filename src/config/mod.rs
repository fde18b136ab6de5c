mod types;
mod loader;
mod defaults;

pub use types::{ResolvedSettings, TocSettings};
pub use loader::load_settings;
