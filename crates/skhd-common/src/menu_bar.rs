//! Menu-bar states shown when the daemon switches modes.
//!
//! The daemon invokes the menu-bar command with a single `icon` argument;
//! this table maps that argument to what the menu bar displays.

use serde::Serialize;

use crate::keys::Icon;

/// Glyph shown in the menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuBarIcon {
    Circle,
    CircleFilled,
    ArrowUpCircle,
}

impl MenuBarIcon {
    pub fn symbol(self) -> &'static str {
        match self {
            MenuBarIcon::Circle => "\u{25CB}",        // ○
            MenuBarIcon::CircleFilled => "\u{25CF}",  // ●
            MenuBarIcon::ArrowUpCircle => "\u{2B06}", // ⬆
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuBarState {
    pub icon: MenuBarIcon,
    pub tooltip: &'static str,
}

const DEFAULT_STATE: MenuBarState = MenuBarState {
    icon: MenuBarIcon::Circle,
    tooltip: "Default state",
};

/// State for a known icon.
pub fn state(icon: Icon) -> MenuBarState {
    match icon {
        Icon::Default => DEFAULT_STATE,
        Icon::Shortcut => MenuBarState {
            icon: MenuBarIcon::CircleFilled,
            tooltip: "Executing shortcut",
        },
        Icon::Launcher => MenuBarState {
            icon: MenuBarIcon::ArrowUpCircle,
            tooltip: "Opening app",
        },
    }
}

/// State for the raw `icon` argument. Unknown names show the default state.
pub fn state_for(name: &str) -> MenuBarState {
    name.parse::<Icon>().map(state).unwrap_or(DEFAULT_STATE)
}
