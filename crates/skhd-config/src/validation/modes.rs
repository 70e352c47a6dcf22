//! Mode graph validation: default mode, entry shortcuts, transitions.

use std::collections::HashSet;

use skhd_common::Key;

use crate::schema::ShortcutConfig;

use super::helpers::BINDING_DELIMITERS;

/// Exactly one default mode, unique names, entry shortcuts where needed.
pub(crate) fn validate_modes(errors: &mut Vec<String>, config: &ShortcutConfig) {
    let defaults = config.modes.iter().filter(|m| m.is_default).count();
    if defaults != 1 {
        errors.push(format!("expected exactly one default mode, found {defaults}"));
    }

    let mut seen = HashSet::new();
    for mode in &config.modes {
        if mode.name.trim().is_empty() {
            errors.push("mode name must not be empty".into());
        } else if mode.name.contains(char::is_whitespace)
            || mode.name.contains(BINDING_DELIMITERS)
            || mode.name.contains('@')
        {
            errors.push(format!(
                "mode name '{}' must not contain whitespace, '@', '<', ':' or ';'",
                mode.name.escape_debug()
            ));
        } else if !seen.insert(mode.name.as_str()) {
            errors.push(format!("duplicate mode '{}'", mode.name));
        }

        match (&mode.shortcut, mode.is_default) {
            (None, false) => errors.push(format!("mode '{}' has no entry shortcut", mode.name)),
            (Some(_), true) => errors.push(format!(
                "default mode '{}' must not have an entry shortcut",
                mode.name
            )),
            _ => {}
        }
    }
}

/// Transitions reference known modes; each non-default mode can be entered
/// from and left to the default mode.
pub(crate) fn validate_transitions(errors: &mut Vec<String>, config: &ShortcutConfig) {
    for transition in &config.transitions {
        for endpoint in [&transition.from, &transition.to] {
            if config.mode(endpoint).is_none() {
                errors.push(format!(
                    "transition {} -> {} references unknown mode '{endpoint}'",
                    transition.from, transition.to
                ));
            }
        }
        if transition.from == transition.to {
            errors.push(format!("transition {0} -> {0} does not change mode", transition.from));
        }

        let known =
            config.mode(&transition.from).is_some() && config.mode(&transition.to).is_some();
        match config.transition_shortcut(transition) {
            None if known => errors.push(format!(
                "transition {} -> {} has no shortcut",
                transition.from, transition.to
            )),
            // Every non-default mode already returns to the default mode on
            // escape.
            Some(shortcut)
                if shortcut.modifiers.is_empty()
                    && shortcut.key == Key::ESCAPE
                    && !config.is_default_mode(&transition.from)
                    && !config.is_default_mode(&transition.to) =>
            {
                errors.push(format!(
                    "transition {} -> {} on escape conflicts with the return to the default mode",
                    transition.from, transition.to
                ));
            }
            _ => {}
        }
    }

    let Some(default_mode) = config.default_mode() else {
        return;
    };

    for mode in config.modes.iter().filter(|m| !m.is_default) {
        let entered = config
            .transitions
            .iter()
            .any(|t| t.from == default_mode.name && t.to == mode.name);
        let left = config
            .transitions
            .iter()
            .any(|t| t.from == mode.name && t.to == default_mode.name);

        if !entered {
            errors.push(format!(
                "mode '{}' cannot be entered from '{}'",
                mode.name, default_mode.name
            ));
        }
        if !left {
            errors.push(format!(
                "mode '{}' has no transition back to '{}'",
                mode.name, default_mode.name
            ));
        }
    }
}
