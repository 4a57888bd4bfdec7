//! Validation for safelist entries.

use crate::schema::{SafelistEntry, WeftConfig};
use regex::Regex;

/// Validate safelist constraints.
///
/// Literal classes must be non-blank; pattern entries must compile as
/// regexes and name only non-blank variants.
pub(crate) fn validate_safelist(errors: &mut Vec<String>, config: &WeftConfig) {
    for (i, entry) in config.safelist.iter().enumerate() {
        match entry {
            SafelistEntry::Class(name) => {
                if name.trim().is_empty() {
                    errors.push(format!("safelist[{i}] is blank"));
                }
            }
            SafelistEntry::Pattern { pattern, variants } => {
                if let Err(e) = Regex::new(pattern) {
                    errors.push(format!(
                        "safelist[{i}].pattern = {pattern:?} is not a valid regex: {e}"
                    ));
                }
                for (j, variant) in variants.iter().enumerate() {
                    if variant.trim().is_empty() {
                        errors.push(format!("safelist[{i}].variants[{j}] is blank"));
                    }
                }
            }
        }
    }
}
