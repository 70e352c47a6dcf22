//! Built-in declarations, used when no declarations file exists yet.

use skhd_common::{Icon, Key, Modifier};

use crate::schema::{Action, Mode, ModeShortcut, ShortcutDecl, TransitionDecl};

pub fn modes() -> Vec<Mode> {
    vec![
        Mode {
            name: "default".into(),
            icon: Icon::Default,
            is_default: true,
            shortcut: None,
        },
        Mode {
            name: "shortcut".into(),
            icon: Icon::Shortcut,
            is_default: false,
            shortcut: Some(ModeShortcut::new(&[Modifier::Cmd], Key::SPACE)),
        },
        Mode {
            name: "launcher".into(),
            icon: Icon::Launcher,
            is_default: false,
            shortcut: Some(ModeShortcut::new(&[Modifier::Cmd, Modifier::Shift], Key::SPACE)),
        },
    ]
}

pub fn transitions() -> Vec<TransitionDecl> {
    vec![
        TransitionDecl::new("default", "shortcut"),
        TransitionDecl::new("shortcut", "default"),
        TransitionDecl::new("default", "launcher"),
        TransitionDecl::new("launcher", "default"),
    ]
}

fn shortcut(
    mode: &str,
    modifiers: &[Modifier],
    key: Key,
    omit_modifier_allowed: bool,
    action: Action,
    comment: &str,
) -> ShortcutDecl {
    ShortcutDecl {
        mode: mode.into(),
        modifiers: modifiers.to_vec(),
        key,
        omit_modifier_allowed,
        comment: comment.into(),
        action,
    }
}

pub fn shortcuts() -> Vec<ShortcutDecl> {
    use Modifier::{Cmd, Hyper, Shift};

    vec![
        // Apps
        shortcut(
            "launcher",
            &[Cmd],
            Key::Char('a'),
            true,
            Action::open_app("Arc"),
            "Open Arc",
        ),
        shortcut(
            "launcher",
            &[Cmd],
            Key::Char('k'),
            true,
            Action::open_app("Calendar"),
            "Open Calendar",
        ),
        shortcut(
            "launcher",
            &[Cmd],
            Key::Char('e'),
            true,
            Action::open_app("Reminders"),
            "Open Reminders",
        ),
        // Browse
        shortcut(
            "launcher",
            &[Cmd],
            Key::Char('g'),
            true,
            Action::open_url(
                "https://github.com/michaelheckmann?tab=repositories",
                Some("Space1"),
            ),
            "Visit GitHub",
        ),
        shortcut(
            "launcher",
            &[Cmd],
            Key::Char('y'),
            true,
            Action::open_url("https://www.youtube.com/", Some("Space2")),
            "Visit Youtube",
        ),
        // Folders
        shortcut(
            "launcher",
            &[Cmd],
            Key::Char('d'),
            true,
            Action::open("$HOME/Developer"),
            "Open the Developer folder",
        ),
        // Scripts
        shortcut(
            "shortcut",
            &[Cmd],
            Key::Char('c'),
            true,
            Action::external_command("raycast/clipboard-history/clipboard-history"),
            "View Clipboard History",
        ),
        shortcut(
            "shortcut",
            &[Cmd],
            Key::Char('p'),
            true,
            Action::external_command("thomas/color-picker/pick-color"),
            "Pick a Color",
        ),
        // The quick-add command takes inline arguments, so it is triggered
        // through its own launcher hotkey (hyper + 0x0A) instead of a deep link.
        shortcut(
            "shortcut",
            &[Cmd],
            Key::Char('r'),
            true,
            Action::keypress(Key::ScanCode(0x0A), &[Hyper]),
            "Create a Reminder",
        ),
        // AI
        shortcut(
            "shortcut",
            &[Cmd],
            Key::SPACE,
            true,
            Action::external_command("raycast/raycast-ai/ai-chat"),
            "Open AI Chat",
        ),
        shortcut(
            "shortcut",
            &[Cmd, Shift],
            Key::Char('b'),
            false,
            Action::external_command("raycast/raycast-ai/send-screen-to-ai-chat"),
            "Open AI Chat with Screenshot",
        ),
        shortcut(
            "shortcut",
            &[Cmd, Shift],
            Key::Char('p'),
            false,
            Action::ExternalCommand {
                command: "raycast/raycast-ai/search-ai-chat-presets".into(),
                arguments: Default::default(),
                launch_type: None,
                force_focus: true,
            },
            "Search AI Chat Presets",
        ),
    ]
}
