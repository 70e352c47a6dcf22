use super::*;

use skhd_common::{Key, Modifier};
use skhd_config::commands::{open_app, open_url};
use skhd_config::render::render_shortcut;
use skhd_config::{Shortcut, ShortcutConfig};
use tempfile::TempDir;

const SAMPLE: &str = "\
# Modes
:: default : open -g 'raycast://extensions/a/b/c?'
:: launcher @ : open -g 'raycast://extensions/a/b/c?'

# Mode Shortcut Commands
default < cmd - space ; launcher
launcher < cmd - space ; default
launcher < escape ; default

# Shortcuts
## Shortcut: Open Arc
launcher < cmd - a : open -a 'Arc'; skhd -k 'cmd - space'
launcher < a : open -a 'Arc'; skhd -k 'cmd - space'

## Shortcut: Open the Developer folder
launcher < cmd + shift - d : open $HOME/Developer; skhd -k 'cmd - space'

";

#[test]
fn parses_records_in_file_order() {
    let shortcuts = parse_skhdrc_str(SAMPLE);
    assert_eq!(shortcuts.len(), 2);

    assert_eq!(
        shortcuts[0],
        ParsedShortcut {
            mode: "launcher".into(),
            description: "Open Arc".into(),
            keys: vec!["a".into(), "⌘  a".into()],
            command: "open -a 'Arc'".into(),
        }
    );
    assert_eq!(shortcuts[1].description, "Open the Developer folder");
    assert_eq!(shortcuts[1].keys, ["⌘  ⇧  d"]);
    assert_eq!(shortcuts[1].command, "open $HOME/Developer");
}

#[test]
fn lines_before_first_description_are_ignored() {
    let shortcuts = parse_skhdrc_str("launcher < cmd - a : open -a 'Arc'\n");
    assert!(shortcuts.is_empty());
}

#[test]
fn keys_sorted_by_length_keeping_ties_in_order() {
    let content = "\
## Shortcut: Many
m < cmd + shift - x : one
m < y : two
m < z : three
";
    let shortcuts = parse_skhdrc_str(content);
    assert_eq!(shortcuts[0].keys, ["y", "z", "⌘  ⇧  x"]);
    assert_eq!(shortcuts[0].command, "three");
}

#[test]
fn record_without_description_is_dropped() {
    let content = "\
## Shortcut: Kept
m < a : first
## Shortcut:
m < b : second
";
    let shortcuts = parse_skhdrc_str(content);
    assert_eq!(shortcuts.len(), 1);
    assert_eq!(shortcuts[0].description, "Kept");
    assert_eq!(shortcuts[0].keys, ["a"]);
}

#[test]
fn description_without_bindings_is_kept() {
    let shortcuts = parse_skhdrc_str("## Shortcut: Empty\n");
    assert_eq!(shortcuts.len(), 1);
    assert!(shortcuts[0].keys.is_empty());
    assert_eq!(shortcuts[0].mode, "");
}

#[test]
fn splits_on_first_delimiters_only() {
    let content = "\
## Shortcut: Browse
launcher < cmd - g : osascript -e 'make new tab with properties {URL:\"https://x.y\"}'; skhd -k 'cmd - space'
";
    let shortcuts = parse_skhdrc_str(content);
    assert_eq!(
        shortcuts[0].command,
        "osascript -e 'make new tab with properties {URL:\"https://x.y\"}'"
    );
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let content = "   ## Shortcut:   Padded   \n\t launcher <  alt - x  :  open x ;  rest \n";
    let shortcuts = parse_skhdrc_str(content);
    assert_eq!(shortcuts[0].description, "Padded");
    assert_eq!(shortcuts[0].mode, "launcher");
    assert_eq!(shortcuts[0].keys, ["⌥  x"]);
    assert_eq!(shortcuts[0].command, "open x");
}

#[test]
fn rendered_shortcuts_parse_back() {
    let cases = [
        Shortcut::WithModifiers {
            mode: "launcher".into(),
            modifiers: vec![Modifier::Hyper],
            key: Key::Char('k'),
            omit_modifier_allowed: false,
            command: open_app("Calendar"),
            comment: "Open Calendar".into(),
        },
        Shortcut::WithoutModifiers {
            mode: "shortcut".into(),
            key: Key::ESCAPE,
            command: open_url("example.com", None),
            comment: "Visit Example".into(),
        },
    ];

    for shortcut in cases {
        let content = format!(
            "{DESCRIPTION_PREFIX} {}\n{}\n",
            shortcut.comment(),
            render_shortcut(&shortcut)
        );
        let parsed = parse_skhdrc_str(&content);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].mode, shortcut.mode());
        assert_eq!(parsed[0].command, shortcut.command());
        assert_eq!(parsed[0].description, shortcut.comment());
        // Glyphs are display-only; compare against the glyph form.
        let chord = skhd_config::render_base_shortcut(None, shortcut.modifiers(), shortcut.key());
        assert_eq!(parsed[0].keys, [replace_key(&chord)]);
    }
}

#[test]
fn compiled_builtin_config_documents_every_shortcut() {
    let config = ShortcutConfig::default();
    let content = skhd_generator::compile(&config).unwrap();

    let parsed = parse_skhdrc_str(&content);
    assert_eq!(parsed.len(), config.shortcuts.len());
    for (parsed, decl) in parsed.iter().zip(&config.shortcuts) {
        assert_eq!(parsed.description, decl.comment);
        assert_eq!(parsed.mode, decl.mode);
    }

    let arc = &parsed[0];
    assert_eq!(arc.keys, ["a", "⌘  a"]);
    assert_eq!(arc.command, "open -a 'Arc'");
}

#[test]
fn missing_file_is_source_missing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".skhdrc");
    let err = parse_skhdrc(&path).unwrap_err();
    assert!(matches!(err, DocsError::SourceMissing(ref p) if p == &path));
}

#[test]
fn directory_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let err = parse_skhdrc(dir.path()).unwrap_err();
    assert!(matches!(err, DocsError::Read { .. }));
}

#[test]
fn parses_file_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".skhdrc");
    std::fs::write(&path, SAMPLE).unwrap();

    let shortcuts = parse_skhdrc(&path).unwrap();
    assert_eq!(shortcuts.len(), 2);
}
