//! Duplicate binding detection.
//!
//! Two passes over structural [`BindingKey`]s: every primary binding, then
//! every modifier-less binding, explicit or produced by
//! `omit_modifier_allowed`. Each pass reports all colliding bindings.

use std::collections::HashSet;

use skhd_common::CompileError;
use skhd_config::{BindingKey, Shortcut};

/// Fail if any two bindings would trigger on the same chord in the same mode.
pub fn validate_bindings(shortcuts: &[Shortcut]) -> Result<(), CompileError> {
    let primary: Vec<BindingKey> = shortcuts.iter().map(Shortcut::binding_key).collect();
    let duplicates = find_duplicates(&primary);
    if !duplicates.is_empty() {
        return Err(CompileError::DuplicateBindings(duplicates));
    }

    let unmodified: Vec<BindingKey> = shortcuts
        .iter()
        .filter(|s| s.modifiers().is_empty())
        .map(Shortcut::binding_key)
        .chain(
            shortcuts
                .iter()
                .filter_map(Shortcut::alias)
                .map(|alias| alias.binding_key()),
        )
        .collect();
    let duplicates = find_duplicates(&unmodified);
    if !duplicates.is_empty() {
        return Err(CompileError::DuplicateUnmodifiedBindings(duplicates));
    }

    Ok(())
}

/// Canonical text of every key that occurs more than once, in order of its
/// first repeat.
fn find_duplicates(keys: &[BindingKey]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for key in keys {
        if !seen.insert(key) && reported.insert(key) {
            duplicates.push(key.to_string());
        }
    }
    duplicates
}
