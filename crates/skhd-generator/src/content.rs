//! Output accumulator for the generated skhd configuration.

use skhd_config::render::collapse_whitespace;

/// Accumulates the generated file section by section.
///
/// Owned and passed through the generation phases, then consumed once by
/// [`ContentBuilder::finish`].
#[derive(Debug, Default)]
pub struct ContentBuilder {
    content: String,
}

/// How entries inside a section are separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    /// One entry per line.
    Compact,
    /// A blank line between entries.
    Separated,
}

impl ContentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `# <headline>` comment followed by the entries.
    ///
    /// Entries may span several lines; whitespace is collapsed line by line.
    /// Every section ends with a blank line.
    pub fn section(mut self, headline: &str, entries: &[String], spacing: Spacing) -> Self {
        let delimiter = match spacing {
            Spacing::Compact => "\n",
            Spacing::Separated => "\n\n",
        };

        self.content.push_str("# ");
        self.content.push_str(&collapse_whitespace(headline));
        self.content.push('\n');

        let body = entries
            .iter()
            .map(|entry| {
                entry
                    .lines()
                    .map(collapse_whitespace)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect::<Vec<_>>()
            .join(delimiter);

        self.content.push_str(&body);
        self.content.push_str("\n\n");
        self
    }

    pub fn finish(self) -> String {
        self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_section() {
        let content = ContentBuilder::new()
            .section("Modes", &["a".into(), "b".into()], Spacing::Compact)
            .finish();
        assert_eq!(content, "# Modes\na\nb\n\n");
    }

    #[test]
    fn separated_section() {
        let content = ContentBuilder::new()
            .section("Shortcuts", &["a".into(), "b".into()], Spacing::Separated)
            .finish();
        assert_eq!(content, "# Shortcuts\na\n\nb\n\n");
    }

    #[test]
    fn collapses_whitespace_per_line() {
        let entry = "x  <   y\n   z    ;  w".to_string();
        let content = ContentBuilder::new()
            .section("  Mode   Shortcut Commands ", &[entry], Spacing::Compact)
            .finish();
        assert_eq!(content, "# Mode Shortcut Commands\nx < y\nz ; w\n\n");
    }

    #[test]
    fn sections_accumulate_in_order() {
        let content = ContentBuilder::new()
            .section("One", &["1".into()], Spacing::Compact)
            .section("Two", &["2".into()], Spacing::Compact)
            .finish();
        assert_eq!(content, "# One\n1\n\n# Two\n2\n\n");
    }

    #[test]
    fn empty_section_keeps_headline() {
        let content = ContentBuilder::new()
            .section("Shortcuts", &[], Spacing::Separated)
            .finish();
        assert_eq!(content, "# Shortcuts\n\n\n");
    }
}
