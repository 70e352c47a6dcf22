//! Read-only documentation of a generated skhd configuration.
//!
//! Parses the `## Shortcut:` records back out of `.skhdrc`, renders their
//! chords with key glyphs and groups them by command type for listing.

pub mod glyphs;
pub mod group;
pub mod parse;

pub use glyphs::replace_key;
pub use group::{group_by_command, Section, SectionKind};
pub use parse::{parse_skhdrc, parse_skhdrc_str, ParsedShortcut};

use std::path::Path;

use skhd_common::DocsError;

/// Parse the file at `path` and group its shortcuts for display.
pub fn list_shortcuts(path: &Path) -> Result<Vec<Section>, DocsError> {
    Ok(group_by_command(parse_skhdrc(path)?))
}
