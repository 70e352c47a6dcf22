//! Typed actions a shortcut can trigger.
//!
//! Declarations never carry raw command text: each action is turned into a
//! daemon command line by the builders in [`crate::commands`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use skhd_common::{Key, Modifier};

use crate::commands::{self, LauncherParams};

/// How the launcher should start an extension command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LaunchType {
    UserInitiated,
    Background,
}

impl LaunchType {
    pub fn as_str(self) -> &'static str {
        match self {
            LaunchType::UserInitiated => "userInitiated",
            LaunchType::Background => "background",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Open a path or URL with the system handler.
    Open { path: String },

    /// Open (or focus) an application by name.
    OpenApp { name: String },

    /// Open a URL, optionally as a new tab in a named browser space.
    OpenUrl {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        space: Option<String>,
    },

    /// Run a launcher extension command (`owner/package/command`).
    ExternalCommand {
        command: String,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        arguments: BTreeMap<String, String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        launch_type: Option<LaunchType>,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        force_focus: bool,
    },

    /// Run a launcher AI command.
    AiCommand {
        command: String,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        arguments: BTreeMap<String, String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        launch_type: Option<LaunchType>,
    },

    /// Fire an Alfred workflow trigger.
    Alfred { trigger: String },

    /// Send a key combination through the daemon.
    Keypress {
        key: Key,
        #[serde(default)]
        modifiers: Vec<Modifier>,
    },
}

impl Action {
    pub fn open(path: &str) -> Self {
        Action::Open { path: path.into() }
    }

    pub fn open_app(name: &str) -> Self {
        Action::OpenApp { name: name.into() }
    }

    pub fn open_url(url: &str, space: Option<&str>) -> Self {
        Action::OpenUrl {
            url: url.into(),
            space: space.map(Into::into),
        }
    }

    pub fn external_command(command: &str) -> Self {
        Action::ExternalCommand {
            command: command.into(),
            arguments: BTreeMap::new(),
            launch_type: None,
            force_focus: false,
        }
    }

    pub fn keypress(key: Key, modifiers: &[Modifier]) -> Self {
        Action::Keypress {
            key,
            modifiers: modifiers.to_vec(),
        }
    }

    /// Identifier of the extension, AI command or workflow, if any.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Action::ExternalCommand { command, .. } | Action::AiCommand { command, .. } => {
                Some(command)
            }
            Action::Alfred { trigger } => Some(trigger),
            _ => None,
        }
    }

    /// Build the daemon command line for this action.
    pub fn to_command(&self) -> String {
        match self {
            Action::Open { path } => commands::open(path),
            Action::OpenApp { name } => commands::open_app(name),
            Action::OpenUrl { url, space } => commands::open_url(url, space.as_deref()),
            Action::ExternalCommand {
                command,
                arguments,
                launch_type,
                force_focus,
            } => commands::open_external_command(
                command,
                &LauncherParams {
                    arguments: arguments.clone(),
                    launch_type: *launch_type,
                    force_focus: *force_focus,
                },
            ),
            Action::AiCommand {
                command,
                arguments,
                launch_type,
            } => commands::open_ai_command(
                command,
                &LauncherParams {
                    arguments: arguments.clone(),
                    launch_type: *launch_type,
                    force_focus: false,
                },
            ),
            Action::Alfred { trigger } => commands::open_alfred(trigger),
            Action::Keypress { key, modifiers } => commands::execute_keypress(key, modifiers),
        }
    }
}
