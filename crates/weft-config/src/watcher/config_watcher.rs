//! Core config file watcher implementation.
//!
//! Contains the [`ConfigWatcher`] struct that monitors `weft.toml`
//! for changes using the `notify` crate, with debounced notifications.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};
use weft_common::ConfigError;

/// Debounce window for editor atomic saves (write + rename).
const DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches a config file for changes and sends reload signals.
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Create a new watcher for the given config file path.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!(
                "config file {} does not exist yet, will watch for creation",
                path.display()
            );
        }

        Ok(Self { path })
    }

    /// Watch the config file, sending `()` on the broadcast channel per
    /// (debounced) change. Runs until the watcher is torn down.
    ///
    /// The parent directory is watched rather than the file itself, so
    /// deletion and re-creation of the file are picked up too.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        let watch_dir = match self.path.parent() {
            Some(parent) => parent.to_path_buf(),
            None => self.path.clone(),
        };
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();

        info!("starting config file watcher for {}", self.path.display());

        // Bridge the sync notify callback into async
        let (notify_tx, mut notify_rx) = mpsc::channel::<()>(16);

        let mut watcher = RecommendedWatcher::new(
            move |result| handle_fs_event(result, &file_name, &notify_tx),
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .map_err(|e| {
                ConfigError::WatchError(format!("failed to watch {}: {e}", watch_dir.display()))
            })?;

        // `watcher` must outlive the loop below; dropping it stops the events.
        loop {
            if notify_rx.recv().await.is_none() {
                // Channel closed, watcher torn down
                return Ok(());
            }

            // Coalesce further signals within the debounce window
            let debounce = tokio::time::sleep(DEBOUNCE);
            tokio::pin!(debounce);
            loop {
                tokio::select! {
                    _ = &mut debounce => break,
                    msg = notify_rx.recv() => {
                        if msg.is_none() {
                            return Ok(());
                        }
                    }
                }
            }

            info!("config file changed, sending reload signal");
            if tx.send(()).is_err() {
                debug!("no receivers for config reload signal");
            }
        }
    }
}

/// Notify callback: forward modify/create events for our file.
fn handle_fs_event(
    result: Result<Event, notify::Error>,
    file_name: &OsString,
    tx: &mpsc::Sender<()>,
) {
    let event = match result {
        Ok(event) => event,
        Err(e) => {
            error!("file watcher error: {e}");
            return;
        }
    };

    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
        return;
    }

    let is_our_file = event
        .paths
        .iter()
        .any(|p| p.file_name().map(|n| n == file_name).unwrap_or(false));

    if is_our_file {
        debug!("config file change detected");
        let _ = tx.try_send(());
    }
}
