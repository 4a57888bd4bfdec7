//! Preset file loading.

use super::types::PresetOverlay;
use std::path::Path;
use tracing::info;
use weft_common::ConfigError;

/// Load a preset from a TOML file path.
///
/// Preset paths written in a config are resolved relative to the config
/// file's directory by the caller; this function takes the final path.
pub fn load_preset(path: &Path) -> Result<PresetOverlay, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read preset file {}: {e}", path.display()))
    })?;

    let preset: PresetOverlay = toml::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to parse preset TOML {}: {e}",
            path.display()
        ))
    })?;

    info!("loaded preset from {}", path.display());
    Ok(preset)
}
