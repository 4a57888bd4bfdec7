//! Dark mode strategy configuration types.

use serde::{Deserialize, Serialize};

/// How the consumer decides when dark variants apply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum DarkModeStrategy {
    /// Follow the `prefers-color-scheme` media query.
    #[default]
    Media,
    /// Dark variants apply under a `.dark` ancestor class.
    Class,
    /// Dark variants apply under a custom selector.
    Selector,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DarkModeConfig {
    pub strategy: DarkModeStrategy,
    /// Selector used when `strategy = "selector"`.
    pub selector: String,
}

impl Default for DarkModeConfig {
    fn default() -> Self {
        Self {
            strategy: DarkModeStrategy::Media,
            selector: ".dark".into(),
        }
    }
}
