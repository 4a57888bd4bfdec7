//! Plugin reference configuration types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A reference to an extension module the consumer should load.
///
/// Written either as a bare name (`plugins = ["typography"]`) or as a
/// table with options (`[[plugins]]` with `name` and `options`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginRef {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        options: BTreeMap<String, toml::Value>,
    },
}

impl PluginRef {
    /// The plugin's module name, whichever form it was written in.
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Detailed { name, .. } => name,
        }
    }
}
