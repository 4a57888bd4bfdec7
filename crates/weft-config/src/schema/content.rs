//! Content source configuration types.

use serde::{Deserialize, Serialize};

/// Which project files are scanned for class tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Glob patterns, kept in the order they were written.
    pub files: Vec<String>,
    /// Interpret globs relative to the config file instead of the
    /// working directory.
    pub relative: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            files: vec![
                "./index.html".into(),
                "./src/**/*.{vue,js,ts,jsx,tsx}".into(),
            ],
            relative: false,
        }
    }
}
