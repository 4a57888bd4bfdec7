//! Weft configuration system.
//!
//! Provides the TOML-based project configuration for the weft
//! utility-class engine: content scan globs, declarative theme
//! overrides, plugin references, shareable presets, live reload, and
//! full validation. All sections use sensible defaults so partial
//! configs work out of the box.
//!
//! The descriptor is loaded once at consumer startup and handed over by
//! value; nothing here scans files or resolves theme tokens -- that is
//! the consumer's job.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use weft_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod loader;
pub mod preset;
pub mod reload;
pub mod schema;
pub mod validation;
pub mod watcher;
pub mod writer;

// Re-export core types for convenience
pub use loader::{find_project_config, CONFIG_FILE_NAME};
pub use preset::{apply_preset, load_preset, PresetOverlay};
pub use reload::ReloadManager;
pub use schema::{WeftConfig, CONFIG_SCHEMA_VERSION};
pub use watcher::ConfigWatcher;
pub use writer::{save_config, save_config_to_path};

use std::path::Path;
use weft_common::ConfigError;

/// Convenience function to load the project config from the working directory.
///
/// Walks up from the cwd to find `weft.toml`, scaffolds a commented
/// default file when none exists, overlays any presets the config
/// lists, and validates the result.
pub fn load_config() -> Result<WeftConfig, ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| {
        ConfigError::ParseError(format!("could not determine working directory: {e}"))
    })?;
    load_config_from(&cwd)
}

/// Discover and load the project config starting from `dir`.
///
/// Validation runs once, on the fully overlaid config; if it fails, a
/// warning is logged and the default descriptor is returned instead.
pub fn load_config_from(dir: &Path) -> Result<WeftConfig, ConfigError> {
    let path = match loader::find_project_config(dir) {
        Some(path) => path,
        None => {
            let path = dir.join(loader::CONFIG_FILE_NAME);
            tracing::info!("no config found under {}, creating default", dir.display());
            loader::create_default_config(&path)?;
            return Ok(WeftConfig::default());
        }
    };

    let mut config = loader::load_from_path(&path)?;

    // Presets resolve relative to the config file
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    for name in config.presets.clone() {
        match preset::load_preset(&base.join(&name)) {
            Ok(overlay) => preset::apply_preset(&mut config, &overlay),
            Err(e) => {
                tracing::warn!("failed to load preset '{name}': {e}");
            }
        }
    }

    if let Err(e) = validation::validate(&config) {
        tracing::warn!("config validation warning: {e}");
        tracing::warn!("falling back to default config");
        return Ok(WeftConfig::default());
    }

    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
///
/// This is the handoff format for the external consumer: the descriptor
/// fields are exposed verbatim, with no normalization.
pub fn config_to_json(config: &WeftConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = WeftConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"content\""));
        assert!(json.contains("\"theme\""));
        assert!(json.contains("\"plugins\""));
        assert!(json.contains("\"safelist\""));
        assert!(json.contains("\"dark_mode\""));
        assert!(json.contains("\"options\""));
        assert!(json.contains("\"core_plugins\""));
        assert!(json.contains("\"presets\""));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = WeftConfig::default();
        let json = config_to_json(&config);
        let parsed: WeftConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn load_config_from_scaffolds_default_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config, WeftConfig::default());
        assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn load_config_from_reports_globs_in_written_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"
[content]
files = ["./index.html", "./src/**/*.{ts,tsx}"]
"#,
        )
        .unwrap();

        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(
            config.content.files,
            vec!["./index.html", "./src/**/*.{ts,tsx}"]
        );
    }

    #[test]
    fn load_config_from_discovers_config_in_ancestor() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"
[content]
files = ["./index.html"]
"#,
        )
        .unwrap();

        let nested = dir.path().join("src").join("components");
        std::fs::create_dir_all(&nested).unwrap();

        let config = load_config_from(&nested).unwrap();
        assert_eq!(config.content.files, vec!["./index.html"]);
    }

    #[test]
    fn load_config_from_overlays_presets() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("base.preset.toml"),
            r##"
plugins = ["typography"]

[theme.extend.colors]
brand = "#0f172a"
"##,
        )
        .unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"presets = ["./base.preset.toml"]"#,
        )
        .unwrap();

        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.plugins.len(), 1);
        assert_eq!(config.plugins[0].name(), "typography");
        assert!(config.theme.extend.contains_key("colors"));
    }

    #[test]
    fn invalid_config_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"
[content]
files = []
"#,
        )
        .unwrap();

        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config, WeftConfig::default());
    }

    #[test]
    fn preset_induced_invalid_config_also_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("bad.preset.toml"),
            r#"
[content]
files = ["./src/**/*.{ts,tsx"]
"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"presets = ["./bad.preset.toml"]"#,
        )
        .unwrap();

        // The preset's broken glob fails the post-overlay validation,
        // which behaves the same as an invalid config file
        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config, WeftConfig::default());
    }

    #[test]
    fn load_config_from_ignores_missing_preset() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"presets = ["./no-such.preset.toml"]"#,
        )
        .unwrap();

        let config = load_config_from(dir.path()).unwrap();
        assert!(config.plugins.is_empty());
    }
}
