//! Shortcut declaration validation.

use crate::schema::ShortcutConfig;

use super::helpers::{has_line_break, validate_identifier};

/// Shortcuts target declared non-default modes, carry a comment, and use
/// well-formed launcher identifiers.
pub(crate) fn validate_shortcuts(errors: &mut Vec<String>, config: &ShortcutConfig) {
    for (index, shortcut) in config.shortcuts.iter().enumerate() {
        let name = format!("shortcuts[{index}]");

        match config.mode(&shortcut.mode) {
            None => errors.push(format!(
                "{name} references unknown mode '{}'",
                shortcut.mode
            )),
            Some(mode) if mode.is_default => errors.push(format!(
                "{name} is bound to the default mode '{}'",
                shortcut.mode
            )),
            Some(_) => {}
        }

        if shortcut.comment.trim().is_empty() {
            errors.push(format!("{name} has an empty comment"));
        } else if has_line_break(&shortcut.comment) {
            errors.push(format!("{name} comment must fit on one line"));
        }

        if let Some(identifier) = shortcut.action.identifier() {
            validate_identifier(errors, &format!("{name}.action"), identifier);
        }
    }
}
