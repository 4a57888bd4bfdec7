//! Class emission options: prefix, separator, important.

use serde::{Deserialize, Serialize};

/// The `important` option: a simple on/off, or a selector string the
/// consumer scopes all generated rules under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Important {
    Enabled(bool),
    Selector(String),
}

impl Default for Important {
    fn default() -> Self {
        Self::Enabled(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsConfig {
    /// Prefix prepended to every generated utility class.
    pub prefix: String,
    /// Separator between variant and utility (`hover:flex`).
    pub separator: String,
    pub important: Important,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            separator: ":".into(),
            important: Important::default(),
        }
    }
}
