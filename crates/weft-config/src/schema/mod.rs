//! Configuration schema types for weft.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults; the descriptor is produced
//! once at load time and never mutated afterwards.

mod content;
mod core_plugins;
mod dark_mode;
mod options;
mod plugins;
mod safelist;
mod theme;

pub use content::*;
pub use core_plugins::*;
pub use dark_mode::*;
pub use options::*;
pub use plugins::*;
pub use safelist::*;
pub use theme::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration descriptor for weft.
///
/// Holds everything the external build tool needs: which files to scan
/// for class tokens, declarative theme overrides, and which plugins to
/// load. Only override what you want to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct WeftConfig {
    /// Shareable preset files overlaid beneath this config.
    pub presets: Vec<String>,
    /// Extension modules the consumer should load, in order.
    pub plugins: Vec<PluginRef>,
    /// Classes the consumer must always keep.
    pub safelist: Vec<SafelistEntry>,
    pub content: ContentConfig,
    pub theme: ThemeConfig,
    pub dark_mode: DarkModeConfig,
    pub options: OptionsConfig,
    pub core_plugins: CorePluginsConfig,
}

// =============================================================================
// Tests
// =============================================================================
