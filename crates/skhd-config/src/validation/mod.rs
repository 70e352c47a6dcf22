//! Declaration validation.
//!
//! Checks the mode graph and the shortcut declarations. Each domain has its
//! own submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`. Duplicate bindings are checked by the compiler.

mod helpers;
mod modes;
mod shortcuts;


use crate::schema::ShortcutConfig;
use skhd_common::ConfigError;

/// Run all validations on the declarations, collecting all errors.
pub fn validate(config: &ShortcutConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    modes::validate_modes(&mut errors, config);
    modes::validate_transitions(&mut errors, config);
    shortcuts::validate_shortcuts(&mut errors, config);
    helpers::validate_identifier(
        &mut errors,
        "menu_bar_extension",
        &config.menu_bar_extension,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
