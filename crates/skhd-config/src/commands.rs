//! Command builders.
//!
//! Pure string transforms producing the command lines skhd runs when a
//! binding fires. Nothing here touches the network or the filesystem.

use std::collections::BTreeMap;

use skhd_common::{Icon, Key, Modifier};

use crate::render::render_base_shortcut;
use crate::schema::LaunchType;

/// URL scheme of the command launcher.
pub const LAUNCHER_SCHEME: &str = "raycast";
/// Application name of the command launcher.
pub const LAUNCHER_APP: &str = "Raycast";
/// Browser that owns the named spaces used by [`open_url`].
pub const BROWSER_APP: &str = "Arc";
/// Prefix of every command produced by [`execute_keypress`].
pub const KEYPRESS_PREFIX: &str = "skhd -k";

/// Query parameters for launcher deep links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LauncherParams {
    pub arguments: BTreeMap<String, String>,
    pub launch_type: Option<LaunchType>,
    /// Also bring the launcher to the front.
    pub force_focus: bool,
}

impl LauncherParams {
    fn has_query(&self) -> bool {
        !self.arguments.is_empty() || self.launch_type.is_some()
    }

    /// `arguments=<percent-encoded JSON>&launchType=<type>`, each part only
    /// when set.
    fn query(&self) -> String {
        let mut pairs = Vec::new();

        if !self.arguments.is_empty() {
            let json = serde_json::to_string(&self.arguments)
                .unwrap_or_else(|_| String::from("{}"));
            pairs.push(format!("arguments={}", urlencoding::encode(&json)));
        }
        if let Some(launch_type) = self.launch_type {
            pairs.push(format!("launchType={}", launch_type.as_str()));
        }

        pairs.join("&")
    }
}

/// Wrap a multi-line AppleScript into a single `osascript` invocation.
fn apple_script_command(script: &str) -> String {
    let statements = script
        .trim()
        .lines()
        .map(|line| format!("-e '{}'", line.trim()))
        .collect::<Vec<_>>()
        .join(" ");
    format!("osascript {statements}")
}

pub fn open(path: &str) -> String {
    format!("open {path}")
}

pub fn open_app(name: &str) -> String {
    format!("open -a '{name}'")
}

/// Deep link into a launcher extension command, `identifier` being
/// `owner/package/command`.
pub fn open_external_command(identifier: &str, params: &LauncherParams) -> String {
    let mut command = format!(
        "open -g '{LAUNCHER_SCHEME}://extensions/{identifier}?{}'",
        params.query()
    );

    if params.force_focus {
        command.push_str(" && ");
        command.push_str(&open_app(LAUNCHER_APP));
    }
    command
}

/// Deep link into a launcher AI command. The query is only added when there
/// is something to pass.
pub fn open_ai_command(identifier: &str, params: &LauncherParams) -> String {
    let mut command = format!("open -g '{LAUNCHER_SCHEME}://ai-commands/{identifier}");
    if params.has_query() {
        command.push('?');
        command.push_str(&params.query());
    }
    command.push('\'');
    command
}

/// Run an Alfred workflow trigger.
pub fn open_alfred(identifier: &str) -> String {
    format!("open -g alfred://runtrigger/{identifier}")
}

/// Open a URL. URLs not starting with `http` get `https://` prepended.
///
/// With a `space`, the URL opens as a new tab in that space of the browser's
/// front window instead of going through `open`.
pub fn open_url(url: &str, space: Option<&str>) -> String {
    let url = if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    let Some(space) = space else {
        return open(&url);
    };

    apple_script_command(&format!(
        r#"
        tell application "{BROWSER_APP}"
          tell front window
            tell space "{space}"
              make new tab with properties {{URL:"{url}"}}
            end tell
          end tell
          activate
        end tell
        "#
    ))
}

/// Synthesize a keypress through skhd itself.
pub fn execute_keypress(key: &Key, modifiers: &[Modifier]) -> String {
    format!("{KEYPRESS_PREFIX} '{}'", render_base_shortcut(None, modifiers, key))
}

/// Whether a command line is a synthesized keypress.
pub fn is_keypress(command: &str) -> bool {
    command.starts_with(KEYPRESS_PREFIX)
}

/// Command run on every mode switch to update the menu-bar icon.
pub fn menu_bar_command(extension: &str, icon: Icon) -> String {
    let params = LauncherParams {
        arguments: BTreeMap::from([("icon".to_string(), icon.as_str().to_string())]),
        launch_type: Some(LaunchType::Background),
        force_focus: false,
    };
    open_external_command(extension, &params)
}
