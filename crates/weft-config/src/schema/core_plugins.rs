//! Built-in utility group toggles.

use serde::{Deserialize, Serialize};

/// Built-in utility groups the consumer should skip entirely.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CorePluginsConfig {
    pub disable: Vec<String>,
}
