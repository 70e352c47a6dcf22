//! Key and modifier vocabulary understood by skhd.
//!
//! Every value here parses from and displays as its skhd text form, which is
//! also how it is serialized in the declarations file.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::KeyError;

/// Raw scan code literal: `0x` followed by 1-4 hex digits.
static SCAN_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x([0-9a-fA-F]{1,4})$").unwrap());

/// A modifier key.
///
/// The declaration order is the normalization order used when modifier sets
/// are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Fn,
    Cmd,
    Lcmd,
    Rcmd,
    Shift,
    Lshift,
    Rshift,
    Alt,
    Lalt,
    Ralt,
    Ctrl,
    Lctrl,
    Rctrl,
    Hyper,
    Meh,
}

impl Modifier {
    pub const ALL: [Modifier; 15] = [
        Modifier::Fn,
        Modifier::Cmd,
        Modifier::Lcmd,
        Modifier::Rcmd,
        Modifier::Shift,
        Modifier::Lshift,
        Modifier::Rshift,
        Modifier::Alt,
        Modifier::Lalt,
        Modifier::Ralt,
        Modifier::Ctrl,
        Modifier::Lctrl,
        Modifier::Rctrl,
        Modifier::Hyper,
        Modifier::Meh,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Fn => "fn",
            Modifier::Cmd => "cmd",
            Modifier::Lcmd => "lcmd",
            Modifier::Rcmd => "rcmd",
            Modifier::Shift => "shift",
            Modifier::Lshift => "lshift",
            Modifier::Rshift => "rshift",
            Modifier::Alt => "alt",
            Modifier::Lalt => "lalt",
            Modifier::Ralt => "ralt",
            Modifier::Ctrl => "ctrl",
            Modifier::Lctrl => "lctrl",
            Modifier::Rctrl => "rctrl",
            Modifier::Hyper => "hyper",
            Modifier::Meh => "meh",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Modifier {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Modifier::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| KeyError::UnknownModifier(s.to_string()))
    }
}

/// A named key literal (`return`, `f5`, `sound_up`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyLiteral {
    Return,
    Tab,
    Space,
    Backspace,
    Escape,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Left,
    Right,
    Up,
    Down,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
    SoundUp,
    SoundDown,
    Mute,
    Play,
    Previous,
    Next,
    Rewind,
    Fast,
    BrightnessUp,
    BrightnessDown,
    IlluminationUp,
    IlluminationDown,
}

impl KeyLiteral {
    pub const ALL: [KeyLiteral; 47] = [
        KeyLiteral::Return,
        KeyLiteral::Tab,
        KeyLiteral::Space,
        KeyLiteral::Backspace,
        KeyLiteral::Escape,
        KeyLiteral::Delete,
        KeyLiteral::Home,
        KeyLiteral::End,
        KeyLiteral::PageUp,
        KeyLiteral::PageDown,
        KeyLiteral::Insert,
        KeyLiteral::Left,
        KeyLiteral::Right,
        KeyLiteral::Up,
        KeyLiteral::Down,
        KeyLiteral::F1,
        KeyLiteral::F2,
        KeyLiteral::F3,
        KeyLiteral::F4,
        KeyLiteral::F5,
        KeyLiteral::F6,
        KeyLiteral::F7,
        KeyLiteral::F8,
        KeyLiteral::F9,
        KeyLiteral::F10,
        KeyLiteral::F11,
        KeyLiteral::F12,
        KeyLiteral::F13,
        KeyLiteral::F14,
        KeyLiteral::F15,
        KeyLiteral::F16,
        KeyLiteral::F17,
        KeyLiteral::F18,
        KeyLiteral::F19,
        KeyLiteral::F20,
        KeyLiteral::SoundUp,
        KeyLiteral::SoundDown,
        KeyLiteral::Mute,
        KeyLiteral::Play,
        KeyLiteral::Previous,
        KeyLiteral::Next,
        KeyLiteral::Rewind,
        KeyLiteral::Fast,
        KeyLiteral::BrightnessUp,
        KeyLiteral::BrightnessDown,
        KeyLiteral::IlluminationUp,
        KeyLiteral::IlluminationDown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            KeyLiteral::Return => "return",
            KeyLiteral::Tab => "tab",
            KeyLiteral::Space => "space",
            KeyLiteral::Backspace => "backspace",
            KeyLiteral::Escape => "escape",
            KeyLiteral::Delete => "delete",
            KeyLiteral::Home => "home",
            KeyLiteral::End => "end",
            KeyLiteral::PageUp => "pageup",
            KeyLiteral::PageDown => "pagedown",
            KeyLiteral::Insert => "insert",
            KeyLiteral::Left => "left",
            KeyLiteral::Right => "right",
            KeyLiteral::Up => "up",
            KeyLiteral::Down => "down",
            KeyLiteral::F1 => "f1",
            KeyLiteral::F2 => "f2",
            KeyLiteral::F3 => "f3",
            KeyLiteral::F4 => "f4",
            KeyLiteral::F5 => "f5",
            KeyLiteral::F6 => "f6",
            KeyLiteral::F7 => "f7",
            KeyLiteral::F8 => "f8",
            KeyLiteral::F9 => "f9",
            KeyLiteral::F10 => "f10",
            KeyLiteral::F11 => "f11",
            KeyLiteral::F12 => "f12",
            KeyLiteral::F13 => "f13",
            KeyLiteral::F14 => "f14",
            KeyLiteral::F15 => "f15",
            KeyLiteral::F16 => "f16",
            KeyLiteral::F17 => "f17",
            KeyLiteral::F18 => "f18",
            KeyLiteral::F19 => "f19",
            KeyLiteral::F20 => "f20",
            KeyLiteral::SoundUp => "sound_up",
            KeyLiteral::SoundDown => "sound_down",
            KeyLiteral::Mute => "mute",
            KeyLiteral::Play => "play",
            KeyLiteral::Previous => "previous",
            KeyLiteral::Next => "next",
            KeyLiteral::Rewind => "rewind",
            KeyLiteral::Fast => "fast",
            KeyLiteral::BrightnessUp => "brightness_up",
            KeyLiteral::BrightnessDown => "brightness_down",
            KeyLiteral::IlluminationUp => "illumination_up",
            KeyLiteral::IlluminationDown => "illumination_down",
        }
    }
}

/// A key skhd can bind: a named literal, a single character, or a raw scan
/// code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    Literal(KeyLiteral),
    /// `a`-`z`, `0`-`9` or `<`.
    Char(char),
    /// Rendered as `0xNN`.
    ScanCode(u16),
}

impl Key {
    pub const ESCAPE: Key = Key::Literal(KeyLiteral::Escape);
    pub const SPACE: Key = Key::Literal(KeyLiteral::Space);

    fn is_valid_char(c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || c == '<'
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Literal(literal) => f.write_str(literal.as_str()),
            Key::Char(c) => write!(f, "{c}"),
            Key::ScanCode(code) => write!(f, "0x{code:02X}"),
        }
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(literal) = KeyLiteral::ALL.into_iter().find(|k| k.as_str() == s) {
            return Ok(Key::Literal(literal));
        }

        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if Key::is_valid_char(c) {
                return Ok(Key::Char(c));
            }
        }

        if let Some(caps) = SCAN_CODE_RE.captures(s) {
            if let Ok(code) = u16::from_str_radix(&caps[1], 16) {
                return Ok(Key::ScanCode(code));
            }
        }

        Err(KeyError::UnknownKey(s.to_string()))
    }
}

impl TryFrom<String> for Key {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

/// Icons the menu-bar extension knows how to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Default,
    Shortcut,
    Launcher,
}

impl Icon {
    pub const ALL: [Icon; 3] = [Icon::Default, Icon::Shortcut, Icon::Launcher];

    pub fn as_str(self) -> &'static str {
        match self {
            Icon::Default => "default",
            Icon::Shortcut => "shortcut",
            Icon::Launcher => "launcher",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Icon {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| KeyError::UnknownIcon(s.to_string()))
    }
}
