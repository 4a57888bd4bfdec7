//! Validation for class emission options and dark mode.

use crate::schema::{DarkModeStrategy, Important, WeftConfig};
use regex::Regex;
use std::sync::LazyLock;

/// Regex for the utility prefix: the class-name charset, possibly empty.
static PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").unwrap());

/// Validate options and dark mode constraints.
pub(crate) fn validate_options(errors: &mut Vec<String>, config: &WeftConfig) {
    if config.options.separator.is_empty() {
        errors.push("options.separator must not be empty".into());
    }

    if !PREFIX_RE.is_match(&config.options.prefix) {
        errors.push(format!(
            "options.prefix = {:?} contains characters invalid in a class name",
            config.options.prefix
        ));
    }

    if let Important::Selector(selector) = &config.options.important {
        if selector.trim().is_empty() {
            errors.push("options.important selector must not be blank".into());
        }
    }

    if config.dark_mode.strategy == DarkModeStrategy::Selector
        && config.dark_mode.selector.trim().is_empty()
    {
        errors.push("dark_mode.selector must be set when strategy = \"selector\"".into());
    }
}
