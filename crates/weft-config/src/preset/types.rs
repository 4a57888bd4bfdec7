//! Preset overlay types.

use crate::schema::{
    ContentConfig, CorePluginsConfig, DarkModeConfig, OptionsConfig, PluginRef, SafelistEntry,
    ThemeConfig,
};
use serde::{Deserialize, Serialize};

/// A shareable partial config, laid beneath the user's own `weft.toml`.
///
/// Struct sections are optional and only used where the user kept the
/// default; list and map fields are combined with the user's entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetOverlay {
    pub name: Option<String>,
    pub content: Option<ContentConfig>,
    pub theme: ThemeConfig,
    pub plugins: Vec<PluginRef>,
    pub safelist: Vec<SafelistEntry>,
    pub dark_mode: Option<DarkModeConfig>,
    pub options: Option<OptionsConfig>,
    pub core_plugins: CorePluginsConfig,
}
