use std::fs;
use std::path::Path;

use log::debug;

use crate::config::types::TocSettings;
use crate::utils::error::{BoxResult, TocerError};

/// Load generation settings from a YAML file. Missing keys fall back to
/// their defaults; a malformed document is a configuration error.
pub fn load_settings(path: &Path) -> BoxResult<TocSettings> {
    if !path.exists() {
        return Err(TocerError::Config(format!(
            "Settings file does not exist: {}",
            path.display()
        ))
        .into());
    }

    let content = fs::read_to_string(path)?;
    let settings: TocSettings = serde_yaml::from_str(&content)
        .map_err(|e| TocerError::Config(format!("{}: {}", path.display(), e)))?;

    debug!("Loaded settings from {}", path.display());
    Ok(settings)
}
