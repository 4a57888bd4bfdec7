//! Theme extension configuration types.
//!
//! The descriptor only carries the override tables; merging them into a
//! final design-token set is the consumer's job.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declarative theme overrides, keyed by theme section
/// (`colors`, `spacing`, `font_family`, ...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Additive overrides merged on top of the consumer's base tokens.
    pub extend: BTreeMap<String, toml::Value>,
    /// Wholesale section replacements.
    pub replace: BTreeMap<String, toml::Value>,
}

impl ThemeConfig {
    /// True when no overrides of either kind are declared.
    pub fn is_empty(&self) -> bool {
        self.extend.is_empty() && self.replace.is_empty()
    }
}
