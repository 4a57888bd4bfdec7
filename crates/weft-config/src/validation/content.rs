//! Validation for the content scan globs.

use crate::schema::WeftConfig;

/// Validate content constraints.
///
/// The glob set must be non-empty (an empty set means the consumer
/// scans nothing) and every pattern must be syntactically valid.
pub(crate) fn validate_content(errors: &mut Vec<String>, config: &WeftConfig) {
    if config.content.files.is_empty() {
        errors.push("content.files is empty; the consumer would scan no files".into());
    }

    for (i, pattern) in config.content.files.iter().enumerate() {
        if pattern.trim().is_empty() {
            errors.push(format!("content.files[{i}] is blank"));
            continue;
        }
        if let Err(e) = globset::Glob::new(pattern) {
            errors.push(format!(
                "content.files[{i}] = {pattern:?} is not a valid glob: {e}"
            ));
        }
    }
}
