//! Shortcut declarations and the resolved shortcut model.

use serde::{Deserialize, Serialize};
use skhd_common::{Key, Modifier};

use super::action::Action;
use crate::render::BindingKey;

/// A shortcut as written in the declarations file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutDecl {
    pub mode: String,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    pub key: Key,
    /// Also bind the key without modifiers.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub omit_modifier_allowed: bool,
    pub comment: String,
    pub action: Action,
}

impl ShortcutDecl {
    /// Resolve the action into a command line and pick the shortcut variant.
    pub fn to_shortcut(&self) -> Shortcut {
        let command = self.action.to_command();

        if self.modifiers.is_empty() {
            if self.omit_modifier_allowed {
                tracing::warn!(
                    comment = %self.comment,
                    "omit_modifier_allowed has no effect on a shortcut without modifiers"
                );
            }
            return Shortcut::WithoutModifiers {
                mode: self.mode.clone(),
                key: self.key,
                command,
                comment: self.comment.clone(),
            };
        }

        Shortcut::WithModifiers {
            mode: self.mode.clone(),
            modifiers: self.modifiers.clone(),
            key: self.key,
            omit_modifier_allowed: self.omit_modifier_allowed,
            command,
            comment: self.comment.clone(),
        }
    }
}

/// A shortcut bound to a non-default mode, with its command resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shortcut {
    /// `modifiers` is never empty.
    WithModifiers {
        mode: String,
        modifiers: Vec<Modifier>,
        key: Key,
        omit_modifier_allowed: bool,
        command: String,
        comment: String,
    },
    WithoutModifiers {
        mode: String,
        key: Key,
        command: String,
        comment: String,
    },
}

impl Shortcut {
    pub fn mode(&self) -> &str {
        match self {
            Shortcut::WithModifiers { mode, .. } | Shortcut::WithoutModifiers { mode, .. } => mode,
        }
    }

    pub fn key(&self) -> &Key {
        match self {
            Shortcut::WithModifiers { key, .. } | Shortcut::WithoutModifiers { key, .. } => key,
        }
    }

    pub fn modifiers(&self) -> &[Modifier] {
        match self {
            Shortcut::WithModifiers { modifiers, .. } => modifiers,
            Shortcut::WithoutModifiers { .. } => &[],
        }
    }

    pub fn command(&self) -> &str {
        match self {
            Shortcut::WithModifiers { command, .. }
            | Shortcut::WithoutModifiers { command, .. } => command,
        }
    }

    pub fn comment(&self) -> &str {
        match self {
            Shortcut::WithModifiers { comment, .. }
            | Shortcut::WithoutModifiers { comment, .. } => comment,
        }
    }

    pub fn omit_modifier_allowed(&self) -> bool {
        matches!(
            self,
            Shortcut::WithModifiers {
                omit_modifier_allowed: true,
                ..
            }
        )
    }

    /// The modifier-less alias requested by `omit_modifier_allowed`.
    pub fn alias(&self) -> Option<Shortcut> {
        match self {
            Shortcut::WithModifiers {
                mode,
                key,
                omit_modifier_allowed: true,
                command,
                comment,
                ..
            } => Some(Shortcut::WithoutModifiers {
                mode: mode.clone(),
                key: *key,
                command: command.clone(),
                comment: comment.clone(),
            }),
            _ => None,
        }
    }

    /// Same binding, different command.
    pub fn with_command(&self, command: String) -> Shortcut {
        let mut shortcut = self.clone();
        match &mut shortcut {
            Shortcut::WithModifiers { command: c, .. }
            | Shortcut::WithoutModifiers { command: c, .. } => *c = command,
        }
        shortcut
    }

    pub fn binding_key(&self) -> BindingKey {
        BindingKey::new(self.mode(), self.modifiers(), *self.key())
    }
}
