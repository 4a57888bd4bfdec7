//! Validation for plugin references.

use crate::schema::WeftConfig;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Regex for a plugin module reference: scoped or bare package names.
static PLUGIN_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@?[A-Za-z0-9][A-Za-z0-9/._-]*$").unwrap());

/// Validate plugin constraints: name format and uniqueness.
pub(crate) fn validate_plugins(errors: &mut Vec<String>, config: &WeftConfig) {
    let mut seen: HashSet<&str> = HashSet::new();

    for (i, plugin) in config.plugins.iter().enumerate() {
        let name = plugin.name();
        if name.trim().is_empty() {
            errors.push(format!("plugins[{i}] has an empty name"));
            continue;
        }
        if !PLUGIN_NAME_RE.is_match(name) {
            errors.push(format!(
                "plugins[{i}] = {name:?} is not a valid module reference"
            ));
        }
        if !seen.insert(name) {
            errors.push(format!("plugins[{i}] = {name:?} is listed more than once"));
        }
    }
}
