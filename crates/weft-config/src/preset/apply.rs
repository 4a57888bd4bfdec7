//! Overlay a preset beneath a user config.

use super::types::PresetOverlay;
use crate::schema::{ContentConfig, DarkModeConfig, OptionsConfig, WeftConfig};

/// Lay `preset` beneath `config`.
///
/// The user's config always wins: struct sections are taken from the
/// preset only where the user kept the default, theme tables merge
/// key-wise with user entries winning, and preset plugins/safelist
/// entries are placed before the user's own (skipping plugins the user
/// already lists).
pub fn apply_preset(config: &mut WeftConfig, preset: &PresetOverlay) {
    if let Some(content) = &preset.content {
        if config.content == ContentConfig::default() {
            config.content = content.clone();
        }
    }

    if let Some(dark_mode) = &preset.dark_mode {
        if config.dark_mode == DarkModeConfig::default() {
            config.dark_mode = dark_mode.clone();
        }
    }

    if let Some(options) = &preset.options {
        if config.options == OptionsConfig::default() {
            config.options = options.clone();
        }
    }

    for (key, value) in &preset.theme.extend {
        config
            .theme
            .extend
            .entry(key.clone())
            .or_insert_with(|| value.clone());
    }
    for (key, value) in &preset.theme.replace {
        config
            .theme
            .replace
            .entry(key.clone())
            .or_insert_with(|| value.clone());
    }

    let mut plugins = Vec::with_capacity(preset.plugins.len() + config.plugins.len());
    for plugin in &preset.plugins {
        if !config.plugins.iter().any(|p| p.name() == plugin.name()) {
            plugins.push(plugin.clone());
        }
    }
    plugins.append(&mut config.plugins);
    config.plugins = plugins;

    let mut safelist = preset.safelist.clone();
    safelist.retain(|entry| !config.safelist.contains(entry));
    safelist.append(&mut config.safelist);
    config.safelist = safelist;

    for group in &preset.core_plugins.disable {
        if !config.core_plugins.disable.contains(group) {
            config.core_plugins.disable.push(group.clone());
        }
    }
}
