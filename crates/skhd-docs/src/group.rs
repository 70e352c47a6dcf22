//! Grouping of parsed shortcuts by what their command does.

use serde::Serialize;

use crate::parse::ParsedShortcut;

/// Section a shortcut is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SectionKind {
    #[serde(rename = "Open App")]
    OpenApp,
    Browse,
    Raycast,
    Alfred,
    Other,
}

/// Command fragments checked in order; the first contained one wins.
const PATTERNS: [(&str, SectionKind); 4] = [
    ("open -a", SectionKind::OpenApp),
    ("make new tab", SectionKind::Browse),
    ("raycast://", SectionKind::Raycast),
    ("alfred://", SectionKind::Alfred),
];

impl SectionKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::OpenApp => "Open App",
            Self::Browse => "Browse",
            Self::Raycast => "Raycast",
            Self::Alfred => "Alfred",
            Self::Other => "Other",
        }
    }

    pub fn classify(command: &str) -> Self {
        PATTERNS
            .iter()
            .find(|(pattern, _)| command.contains(pattern))
            .map_or(Self::Other, |(_, kind)| *kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: SectionKind,
    pub shortcuts: Vec<ParsedShortcut>,
}

/// Group shortcuts into sections, ordered by first occurrence.
pub fn group_by_command(shortcuts: Vec<ParsedShortcut>) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();

    for shortcut in shortcuts {
        let kind = SectionKind::classify(&shortcut.command);
        match sections.iter_mut().find(|s| s.title == kind) {
            Some(section) => section.shortcuts.push(shortcut),
            None => sections.push(Section {
                title: kind,
                shortcuts: vec![shortcut],
            }),
        }
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(description: &str, command: &str) -> ParsedShortcut {
        ParsedShortcut {
            mode: "launcher".into(),
            description: description.into(),
            keys: vec!["a".into()],
            command: command.into(),
        }
    }

    #[test]
    fn classifies_commands() {
        assert_eq!(SectionKind::classify("open -a 'Arc'"), SectionKind::OpenApp);
        assert_eq!(
            SectionKind::classify("osascript -e 'make new tab with properties {URL:\"x\"}'"),
            SectionKind::Browse
        );
        assert_eq!(
            SectionKind::classify("open -g 'raycast://extensions/a/b/c?'"),
            SectionKind::Raycast
        );
        assert_eq!(
            SectionKind::classify("open -g alfred://runtrigger/a/b/c"),
            SectionKind::Alfred
        );
        assert_eq!(
            SectionKind::classify("open $HOME/Developer"),
            SectionKind::Other
        );
    }

    #[test]
    fn first_pattern_wins() {
        let command = "open -g 'raycast://extensions/a/b/c?' && open -a 'Raycast'";
        assert_eq!(SectionKind::classify(command), SectionKind::OpenApp);
    }

    #[test]
    fn sections_follow_first_occurrence() {
        let sections = group_by_command(vec![
            parsed("Dev", "open $HOME/Developer"),
            parsed("Arc", "open -a 'Arc'"),
            parsed("Notes", "open -a 'Notes'"),
            parsed("Pick", "open -g 'raycast://extensions/a/b/c?'"),
        ]);

        let titles: Vec<&str> = sections.iter().map(|s| s.title.title()).collect();
        assert_eq!(titles, ["Other", "Open App", "Raycast"]);
        assert_eq!(sections[1].shortcuts.len(), 2);
        assert_eq!(sections[1].shortcuts[1].description, "Notes");
    }

    #[test]
    fn empty_input_has_no_sections() {
        assert!(group_by_command(Vec::new()).is_empty());
    }

    #[test]
    fn section_serializes_title_text() {
        let sections = group_by_command(vec![parsed("Arc", "open -a 'Arc'")]);
        let json = serde_json::to_value(&sections).unwrap();
        assert_eq!(json[0]["title"], "Open App");
        assert_eq!(json[0]["shortcuts"][0]["keys"][0], "a");
    }
}
