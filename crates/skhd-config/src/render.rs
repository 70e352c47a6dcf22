//! Rendering of shortcuts into skhd binding syntax.
//!
//! `launcher < cmd + shift - a : open -a 'Arc'`
//!  ^mode      ^modifiers    ^key ^command

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use skhd_common::{Key, Modifier};

use crate::schema::Shortcut;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every whitespace run to a single space and trim both ends.
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE_RE.replace_all(s.trim(), " ").into_owned()
}

/// Render `<mode> < <m1> + <m2> - <key>`.
///
/// The mode clause is left out without a mode, the `-` without modifiers.
pub fn render_base_shortcut(mode: Option<&str>, modifiers: &[Modifier], key: &Key) -> String {
    let mode_clause = match mode {
        Some(mode) if !mode.is_empty() => format!("{mode} <"),
        _ => String::new(),
    };
    let modifier_clause = modifiers
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" + ");
    let separator = if modifiers.is_empty() { "" } else { "-" };

    collapse_whitespace(&format!("{mode_clause} {modifier_clause} {separator} {key}"))
}

/// Render a full binding line: `<base shortcut> : <command>`.
pub fn render_shortcut(shortcut: &Shortcut) -> String {
    let base = render_base_shortcut(Some(shortcut.mode()), shortcut.modifiers(), shortcut.key());
    collapse_whitespace(&format!("{base} : {}", shortcut.command()))
}

/// Structural identity of a binding, used for duplicate detection.
///
/// Modifiers are kept as a sorted set, so declaration order does not matter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingKey {
    pub mode: String,
    pub modifiers: BTreeSet<Modifier>,
    pub key: Key,
}

impl BindingKey {
    pub fn new(mode: &str, modifiers: &[Modifier], key: Key) -> Self {
        Self {
            mode: mode.to_string(),
            modifiers: modifiers.iter().copied().collect(),
            key,
        }
    }

    pub fn is_unmodified(&self) -> bool {
        self.modifiers.is_empty()
    }
}

impl fmt::Display for BindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modifiers: Vec<Modifier> = self.modifiers.iter().copied().collect();
        f.write_str(&render_base_shortcut(Some(&self.mode), &modifiers, &self.key))
    }
}
