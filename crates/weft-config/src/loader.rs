//! TOML config file loading, discovery, and creation.

use crate::schema::WeftConfig;
use crate::writer;
use std::path::{Path, PathBuf};
use tracing::info;
use weft_common::ConfigError;

/// File name the config is discovered by.
pub const CONFIG_FILE_NAME: &str = "weft.toml";

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// The config is returned exactly as written; validation happens once,
/// after any presets are overlaid.
pub fn load_from_path(path: &Path) -> Result<WeftConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;

    let config: WeftConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Find the project's `weft.toml` by walking up from `start`.
///
/// Checks `start` itself, then each ancestor directory, and returns the
/// first match. Returns `None` when no config exists anywhere up the tree.
pub fn find_project_config(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

/// The conventional config path for the current working directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| {
        ConfigError::ParseError(format!("could not determine working directory: {e}"))
    })?;
    Ok(cwd.join(CONFIG_FILE_NAME))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    writer::write_atomic(path, &default_config_toml())?;
    info!("created default config at {}", path.display());
    Ok(())
}

/// Generate the default TOML config content with comments.
fn default_config_toml() -> String {
    r##"# Weft configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

# presets = ["./weft.preset.toml"]
# plugins = ["typography", "forms"]
# safelist = ["sr-only"]

[content]
files = [
    "./index.html",
    "./src/**/*.{vue,js,ts,jsx,tsx}",
]
# relative = false

[theme.extend]
# colors = { accent = "#7dd3fc" }
# spacing = { "18" = "4.5rem" }

[dark_mode]
# strategy = "media"     # media, class, selector
# selector = ".dark"

[options]
# prefix = ""
# separator = ":"
# important = false      # or a selector string like "#app"

[core_plugins]
# disable = ["preflight"]
"##
    .to_string()
}
