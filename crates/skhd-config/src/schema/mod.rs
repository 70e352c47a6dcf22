//! Declaration schema for the shortcut compiler.
//!
//! The root struct uses `serde(default)`, so a file that only lists
//! `[[shortcuts]]` keeps the built-in modes and transitions.

mod action;
mod mode;
mod shortcut;

pub use action::*;
pub use mode::*;
pub use shortcut::*;

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Default deep-link identifier of the menu-bar extension.
pub const DEFAULT_MENU_BAR_EXTENSION: &str = "michaelheckmann/menu-bar-manager/change-icon";

/// Root of the declarations file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutConfig {
    /// Launcher extension invoked on every mode switch to update the menu bar.
    pub menu_bar_extension: String,
    pub modes: Vec<Mode>,
    pub transitions: Vec<TransitionDecl>,
    pub shortcuts: Vec<ShortcutDecl>,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            menu_bar_extension: DEFAULT_MENU_BAR_EXTENSION.into(),
            modes: defaults::modes(),
            transitions: defaults::transitions(),
            shortcuts: defaults::shortcuts(),
        }
    }
}

impl ShortcutConfig {
    pub fn mode(&self, name: &str) -> Option<&Mode> {
        self.modes.iter().find(|m| m.name == name)
    }

    pub fn default_mode(&self) -> Option<&Mode> {
        self.modes.iter().find(|m| m.is_default)
    }

    pub fn is_default_mode(&self, name: &str) -> bool {
        self.mode(name).is_some_and(|m| m.is_default)
    }

    /// Entry shortcut of a mode, used to leave it again.
    pub fn mode_shortcut(&self, name: &str) -> Option<&ModeShortcut> {
        self.mode(name).and_then(|m| m.shortcut.as_ref())
    }

    /// Shortcut for a declared transition: the explicit one, otherwise the
    /// entry shortcut of the non-default endpoint.
    pub fn transition_shortcut<'a>(
        &'a self,
        decl: &'a TransitionDecl,
    ) -> Option<&'a ModeShortcut> {
        if let Some(shortcut) = &decl.shortcut {
            return Some(shortcut);
        }
        let endpoint = if self.is_default_mode(&decl.to) {
            &decl.from
        } else {
            &decl.to
        };
        self.mode_shortcut(endpoint)
    }

    /// All transitions with their shortcuts resolved. Transitions whose
    /// shortcut cannot be resolved are skipped; validation reports them.
    pub fn resolved_transitions(&self) -> Vec<ModeTransition> {
        self.transitions
            .iter()
            .filter_map(|decl| {
                self.transition_shortcut(decl).map(|shortcut| ModeTransition {
                    from: decl.from.clone(),
                    to: decl.to.clone(),
                    shortcut: shortcut.clone(),
                })
            })
            .collect()
    }

    /// Shortcut declarations resolved into the shortcut model.
    pub fn resolved_shortcuts(&self) -> Vec<Shortcut> {
        self.shortcuts.iter().map(ShortcutDecl::to_shortcut).collect()
    }
}
