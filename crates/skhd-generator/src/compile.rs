//! Compile declarations into skhd configuration text.

use skhd_common::{CompileError, Key};
use skhd_config::commands::{execute_keypress, is_keypress, menu_bar_command};
use skhd_config::render::{render_base_shortcut, render_shortcut};
use skhd_config::{validation, Shortcut, ShortcutConfig};

use crate::content::{ContentBuilder, Spacing};
use crate::duplicates::validate_bindings;

const MODES_HEADLINE: &str = "Modes";
const TRANSITIONS_HEADLINE: &str = "Mode Shortcut Commands";
const SHORTCUTS_HEADLINE: &str = "Shortcuts";
const DESCRIPTION_PREFIX: &str = "## Shortcut:";

/// Generate the full configuration text. Nothing is written.
///
/// The declarations are validated and bindings checked for duplicates before
/// anything is rendered.
pub fn compile(config: &ShortcutConfig) -> Result<String, CompileError> {
    validation::validate(config)?;

    let shortcuts = config.resolved_shortcuts();
    validate_bindings(&shortcuts)?;

    let content = ContentBuilder::new();
    let content = modes(config, content);
    let content = transitions(config, content);
    let content = shortcut_blocks(config, &shortcuts, content)?;

    tracing::debug!(
        modes = config.modes.len(),
        shortcuts = shortcuts.len(),
        "Compiled skhd configuration"
    );
    Ok(content.finish())
}

/// `:: <name> [@] : <menu-bar command>`
fn modes(config: &ShortcutConfig, content: ContentBuilder) -> ContentBuilder {
    let lines: Vec<String> = config
        .modes
        .iter()
        .map(|mode| {
            let capture = if mode.is_default { "" } else { "@" };
            format!(
                ":: {} {capture} : {}",
                mode.name,
                menu_bar_command(&config.menu_bar_extension, mode.icon)
            )
        })
        .collect();

    content.section(MODES_HEADLINE, &lines, Spacing::Compact)
}

/// `<from> < <chord> ; <to>`, plus an escape line for every return to the
/// default mode. Repeated lines are written once.
fn transitions(config: &ShortcutConfig, content: ContentBuilder) -> ContentBuilder {
    let mut lines: Vec<String> = Vec::new();
    let mut push = |line: String| {
        if !lines.contains(&line) {
            lines.push(line);
        }
    };

    for transition in config.resolved_transitions() {
        let chord = render_base_shortcut(
            Some(&transition.from),
            &transition.shortcut.modifiers,
            &transition.shortcut.key,
        );
        push(format!("{chord} ; {}", transition.to));

        if config.is_default_mode(&transition.to) {
            let escape = render_base_shortcut(Some(&transition.from), &[], &Key::ESCAPE);
            push(format!("{escape} ; {}", transition.to));
        }
    }

    content.section(TRANSITIONS_HEADLINE, &lines, Spacing::Compact)
}

fn shortcut_blocks(
    config: &ShortcutConfig,
    shortcuts: &[Shortcut],
    content: ContentBuilder,
) -> Result<ContentBuilder, CompileError> {
    let blocks = shortcuts
        .iter()
        .map(|shortcut| shortcut_block(config, shortcut))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(content.section(SHORTCUTS_HEADLINE, &blocks, Spacing::Separated))
}

/// Description line, the primary binding and the optional modifier-less
/// alias. Every binding also leaves the mode.
fn shortcut_block(config: &ShortcutConfig, shortcut: &Shortcut) -> Result<String, CompileError> {
    let entry = config
        .mode_shortcut(shortcut.mode())
        .ok_or_else(|| CompileError::UnknownMode(shortcut.mode().to_string()))?;
    let unset_mode = execute_keypress(&entry.key, &entry.modifiers);

    let mut lines = vec![format!("{DESCRIPTION_PREFIX} {}", shortcut.comment())];
    lines.push(binding_line(shortcut, &unset_mode));
    if let Some(alias) = shortcut.alias() {
        lines.push(binding_line(&alias, &unset_mode));
    }

    Ok(lines.join("\n"))
}

/// A synthesized keypress has to fire after the mode is left, every other
/// command before it.
fn binding_line(shortcut: &Shortcut, unset_mode: &str) -> String {
    let command = if is_keypress(shortcut.command()) {
        format!("{unset_mode}; {}", shortcut.command())
    } else {
        format!("{}; {unset_mode}", shortcut.command())
    };
    render_shortcut(&shortcut.with_command(command))
}
