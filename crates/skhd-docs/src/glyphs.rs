//! Display glyphs for key names.

const GLYPHS: [(&str, &str); 8] = [
    ("cmd", "⌘"),
    ("ctrl", "⌃"),
    ("alt", "⌥"),
    ("shift", "⇧"),
    ("space", "␣"),
    ("return", "↩"),
    ("tab", "⇥"),
    ("0x2F", "."),
];

/// Replace key names in a chord with their glyphs and drop `-`/`+`.
///
/// Tokens are split on single spaces, so the gaps left by removed separators
/// are kept. The result is for display only and cannot be parsed back.
pub fn replace_key(chord: &str) -> String {
    chord
        .replace(['-', '+'], "")
        .split(' ')
        .map(|token| {
            GLYPHS
                .iter()
                .find(|(name, _)| *name == token)
                .map_or(token, |(_, glyph)| *glyph)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
