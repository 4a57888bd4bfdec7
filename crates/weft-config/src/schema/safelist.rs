//! Safelist configuration types.

use serde::{Deserialize, Serialize};

/// A class the consumer must always keep, regardless of what the
/// content scan finds: either a literal class name or a regex pattern
/// with optional variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SafelistEntry {
    Class(String),
    Pattern {
        pattern: String,
        #[serde(default)]
        variants: Vec<String>,
    },
}
