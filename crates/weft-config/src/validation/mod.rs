//! Full configuration validation.
//!
//! Checks glob syntax, safelist regexes, plugin references, and class
//! emission options. Each domain has its own submodule; this orchestrator
//! calls them all and collects errors into a single `ConfigError`.

mod content;
mod options;
mod plugins;
mod safelist;


use crate::schema::WeftConfig;
use weft_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WeftConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    content::validate_content(&mut errors, config);
    safelist::validate_safelist(&mut errors, config);
    plugins::validate_plugins(&mut errors, config);
    options::validate_options(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
