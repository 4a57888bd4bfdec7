//! Live config reload manager.
//!
//! Combines the file watcher with config loading to provide automatic
//! config reloading when `weft.toml` changes on disk, so watch-mode
//! builds pick up new globs, theme overrides, and plugins without a
//! restart.

use crate::loader;
use crate::preset;
use crate::schema::WeftConfig;
use crate::validation;
use crate::watcher::ConfigWatcher;
use std::path::{Path, PathBuf};
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Manages live config reloading.
///
/// Watches the config file for changes and publishes freshly loaded
/// descriptors via a [`tokio::sync::watch`] channel.
pub struct ReloadManager {
    config_path: PathBuf,
}

impl ReloadManager {
    /// Load the initial config from the given path and start watching for changes.
    ///
    /// Returns the initial config and a watch receiver that will receive
    /// updated configs whenever the file changes on disk. If the initial
    /// load fails, the default descriptor is published instead.
    pub async fn start(config_path: PathBuf) -> (WeftConfig, watch::Receiver<WeftConfig>) {
        let manager = ReloadManager {
            config_path: config_path.clone(),
        };

        let initial_config = match manager.reload_config() {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load config: {e}, using defaults");
                WeftConfig::default()
            }
        };

        let (config_tx, config_rx) = watch::channel(initial_config.clone());

        // Spawn the watcher task
        tokio::spawn(async move {
            manager.run_watch_loop(config_tx).await;
        });

        (initial_config, config_rx)
    }

    /// Internal watch loop that reloads config on file changes.
    async fn run_watch_loop(&self, config_tx: watch::Sender<WeftConfig>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create config watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);

        // Spawn the file watcher
        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        // Listen for change signals and reload
        loop {
            match change_rx.recv().await {
                Ok(()) => {
                    info!("reloading config from {}", self.config_path.display());
                    match self.reload_config() {
                        Ok(config) => {
                            if config_tx.send(config).is_err() {
                                info!("all config receivers dropped, stopping reload manager");
                                break;
                            }
                        }
                        Err(e) => {
                            warn!("config reload failed: {e}");
                        }
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("config watcher lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("config watcher channel closed");
                    break;
                }
            }
        }
    }

    /// Reload config from disk, applying presets and validation.
    fn reload_config(&self) -> Result<WeftConfig, weft_common::ConfigError> {
        let config = self.load_with_presets()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load the config file and overlay any presets it lists.
    fn load_with_presets(&self) -> Result<WeftConfig, weft_common::ConfigError> {
        let mut config = loader::load_from_path(&self.config_path)?;

        let base = self.config_path.parent().unwrap_or_else(|| Path::new("."));
        for name in config.presets.clone() {
            match preset::load_preset(&base.join(&name)) {
                Ok(overlay) => preset::apply_preset(&mut config, &overlay),
                Err(e) => {
                    warn!("failed to load preset '{name}': {e}");
                }
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn start_with_nonexistent_path_uses_defaults() {
        let path = PathBuf::from("/tmp/nonexistent_weft_reload_test.toml");
        let (config, _rx) = ReloadManager::start(path).await;
        assert_eq!(config, WeftConfig::default());
    }

    #[tokio::test]
    async fn start_with_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weft.toml");
        std::fs::write(
            &path,
            r#"
[content]
files = ["./pages/**/*.html"]
"#,
        )
        .unwrap();

        let (config, _rx) = ReloadManager::start(path).await;
        assert_eq!(config.content.files, vec!["./pages/**/*.html"]);
        assert_eq!(config.options.separator, ":"); // default
    }

    #[tokio::test]
    async fn file_change_republishes_updated_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weft.toml");
        std::fs::write(
            &path,
            r#"
[content]
files = ["./index.html"]
"#,
        )
        .unwrap();

        let (initial, mut rx) = ReloadManager::start(path.clone()).await;
        assert_eq!(initial.content.files, vec!["./index.html"]);

        // Give the watcher task time to install before touching the file
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;

        let updated = r#"
[content]
files = ["./pages/**/*.html"]
"#;

        // Rewrite until the debounced reload comes through, in case the
        // first write races watcher installation
        let deadline =
            tokio::time::Instant::now() + std::time::Duration::from_secs(20);
        loop {
            std::fs::write(&path, updated).unwrap();
            match tokio::time::timeout(
                std::time::Duration::from_secs(2),
                rx.changed(),
            )
            .await
            {
                Ok(result) => {
                    result.unwrap();
                    break;
                }
                Err(_) if tokio::time::Instant::now() < deadline => {}
                Err(_) => panic!("config change was never republished"),
            }
        }

        assert_eq!(rx.borrow().content.files, vec!["./pages/**/*.html"]);
    }

    #[tokio::test]
    async fn start_with_invalid_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weft.toml");
        std::fs::write(
            &path,
            r#"
[content]
files = []
"#,
        )
        .unwrap();

        let (config, _rx) = ReloadManager::start(path).await;
        assert_eq!(config, WeftConfig::default());
    }

    #[tokio::test]
    async fn start_applies_listed_presets() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("base.preset.toml"),
            r#"plugins = ["typography"]"#,
        )
        .unwrap();
        let path = dir.path().join("weft.toml");
        std::fs::write(&path, r#"presets = ["./base.preset.toml"]"#).unwrap();

        let (config, _rx) = ReloadManager::start(path).await;
        assert_eq!(config.plugins.len(), 1);
        assert_eq!(config.plugins[0].name(), "typography");
    }
}
