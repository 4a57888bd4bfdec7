//! Atomic TOML writes for the config file.
//!
//! The default-config scaffold and descriptor saves share one write
//! path: write to a `.tmp` sibling, then rename over the target, so a
//! crash mid-write never leaves a torn `weft.toml`.

use std::path::Path;

use weft_common::ConfigError;

use crate::loader::default_config_path;
use crate::schema::WeftConfig;

/// Serialize a descriptor and write it to the conventional path
/// (`./weft.toml`).
pub fn save_config(config: &WeftConfig) -> Result<(), ConfigError> {
    save_config_to_path(config, &default_config_path()?)
}

/// Serialize a descriptor and write it to a specific path.
pub fn save_config_to_path(config: &WeftConfig, path: &Path) -> Result<(), ConfigError> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config to TOML: {e}")))?;

    write_atomic(path, &toml_str)?;
    tracing::debug!(path = %path.display(), "config saved to disk");
    Ok(())
}

/// Write `contents` to `path` atomically, creating parent directories
/// as needed.
///
/// When the rename fails (some Windows filesystems refuse to rename
/// over an open file) the contents are written directly instead.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, contents).map_err(|e| {
        ConfigError::ParseError(format!("failed to write {}: {e}", tmp_path.display()))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        tracing::warn!("atomic rename failed ({e}), falling back to direct write");
        std::fs::write(path, contents).map_err(|e2| {
            ConfigError::ParseError(format!("failed to write {}: {e2}", path.display()))
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::PluginRef;

    #[test]
    fn saved_config_reparses_to_the_same_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weft.toml");

        let mut config = WeftConfig::default();
        config.content.files = vec!["./index.html".into(), "./src/**/*.{ts,tsx}".into()];
        config.plugins = vec![PluginRef::Name("typography".into())];
        config
            .theme
            .extend
            .insert("colors".into(), toml::toml! { accent = "#7dd3fc" }.into());

        save_config_to_path(&config, &path).unwrap();

        let reparsed: WeftConfig =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn write_atomic_creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packages").join("ui").join("weft.toml");

        write_atomic(&path, "# scaffold\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# scaffold\n");
    }

    #[test]
    fn write_atomic_replaces_existing_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weft.toml");
        std::fs::write(&path, "old").unwrap();

        write_atomic(&path, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn no_tmp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weft.toml");

        save_config_to_path(&WeftConfig::default(), &path).unwrap();

        assert!(!path.with_extension("toml.tmp").exists());
    }
}
