//! Mode and mode-transition types.

use serde::{Deserialize, Serialize};
use skhd_common::{Icon, Key, Modifier};

/// A daemon mode the user can switch into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mode {
    pub name: String,
    pub icon: Icon,
    #[serde(default)]
    pub is_default: bool,
    /// Chord that enters this mode from the default mode and, pressed again,
    /// leaves it. `None` only for the default mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<ModeShortcut>,
}

/// The physical key combination bound to a mode switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeShortcut {
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    pub key: Key,
}

impl ModeShortcut {
    pub fn new(modifiers: &[Modifier], key: Key) -> Self {
        Self {
            modifiers: modifiers.to_vec(),
            key,
        }
    }
}

/// A declared edge in the mode graph.
///
/// Without an explicit `shortcut`, the entry shortcut of whichever endpoint is
/// not the default mode is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDecl {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<ModeShortcut>,
}

impl TransitionDecl {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            shortcut: None,
        }
    }
}

/// A transition with its shortcut resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeTransition {
    pub from: String,
    pub to: String,
    pub shortcut: ModeShortcut,
}
