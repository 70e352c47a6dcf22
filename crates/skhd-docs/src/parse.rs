//! Line grammar of a generated skhd configuration.
//!
//! ```text
//! ## Shortcut: Open Arc
//! launcher < cmd - a : open -a 'Arc'; skhd -k 'cmd - space'
//! launcher < a : open -a 'Arc'; skhd -k 'cmd - space'
//! ```
//!
//! Every description line starts a record; the binding lines that follow add
//! one chord each. Lines before the first description are ignored.

use std::path::Path;

use serde::Serialize;
use skhd_common::DocsError;

use crate::glyphs::replace_key;

pub const DESCRIPTION_PREFIX: &str = "## Shortcut:";
const MODE_DELIMITER: char = '<';
const COMMAND_DELIMITER: char = ':';
const COMMAND_END: char = ';';

/// One documented shortcut.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedShortcut {
    pub mode: String,
    pub description: String,
    /// Display chords, shortest first.
    pub keys: Vec<String>,
    pub command: String,
}

impl ParsedShortcut {
    fn starts(description: &str) -> Self {
        Self {
            description: description.trim().to_string(),
            ..Self::default()
        }
    }

    fn push_binding(&mut self, line: &str) {
        let (mode, rest) = line.split_once(MODE_DELIMITER).unwrap_or((line, ""));
        let (chord, rest) = rest.split_once(COMMAND_DELIMITER).unwrap_or((rest, ""));
        let command = rest.split(COMMAND_END).next().unwrap_or_default();

        self.mode = mode.trim().to_string();
        self.keys.push(replace_key(chord.trim()));
        self.command = command.trim().to_string();
    }

    fn finish(mut self) -> Option<Self> {
        if self.description.is_empty() {
            return None;
        }
        // Stable, so equal lengths keep declaration order.
        self.keys.sort_by_key(|k| k.chars().count());
        Some(self)
    }
}

/// Parse configuration text into shortcut records, in file order.
pub fn parse_skhdrc_str(content: &str) -> Vec<ParsedShortcut> {
    let mut shortcuts = Vec::new();
    let mut current: Option<ParsedShortcut> = None;

    for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(description) = line.strip_prefix(DESCRIPTION_PREFIX) {
            shortcuts.extend(current.take().and_then(ParsedShortcut::finish));
            current = Some(ParsedShortcut::starts(description));
            continue;
        }

        if let Some(shortcut) = current.as_mut().filter(|s| !s.description.is_empty()) {
            shortcut.push_binding(line);
        }
    }
    shortcuts.extend(current.and_then(ParsedShortcut::finish));

    shortcuts
}

/// Read and parse the configuration file at `path`.
pub fn parse_skhdrc(path: &Path) -> Result<Vec<ParsedShortcut>, DocsError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            DocsError::SourceMissing(path.to_path_buf())
        } else {
            DocsError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let shortcuts = parse_skhdrc_str(&content);
    tracing::debug!(path = %path.display(), count = shortcuts.len(), "Parsed skhd configuration");
    Ok(shortcuts)
}

#[cfg(test)]
mod tests;
