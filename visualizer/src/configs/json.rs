use std::{fs, path::Path};

use super::VisualizationConfig;
use crate::error::Result;

/// Loads a [`VisualizationConfig`] from a JSON file.
///
/// # Errors
/// Returns `VizError::Io` if the file can't be read, or `VizError::Json` if it can't be parsed.
pub fn load<P: AsRef<Path>>(path: P) -> Result<VisualizationConfig> {
    let content = fs::read_to_string(path)?;
    from_json_str(&content)
}

/// Parses a [`VisualizationConfig`] out of a JSON document.
///
/// # Errors
/// Returns `VizError::Json` if the document is malformed.
pub fn from_json_str(content: &str) -> Result<VisualizationConfig> {
    Ok(serde_json::from_str(content)?)
}
