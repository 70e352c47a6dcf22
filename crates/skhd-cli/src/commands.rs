//! Subcommand handlers.
//!
//! Each handler writes its report to `out`; logs go to stderr.

use std::io::Write;
use std::path::{Path, PathBuf};

use skhd_common::menu_bar::state_for;
use skhd_common::paths::default_skhdrc_path;
use skhd_common::{Result, SkhdError};
use skhd_config::toml_loader::default_config_path;
use skhd_config::{load_config, save_config_to_path, validation, ShortcutConfig};
use skhd_docs::{list_shortcuts, Section};

use crate::cli::Command;

pub fn run(command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Compile {
            config,
            output,
            builtin,
        } => compile(config.as_deref(), output, builtin, out),
        Command::Check { config, builtin } => check(config.as_deref(), builtin, out),
        Command::List { input, json } => list(input, json, out),
        Command::Menubar { icon } => menubar(&icon, out),
        Command::Init { config, force } => init(config, force, out),
    }
}

fn declarations(path: Option<&Path>, builtin: bool) -> Result<ShortcutConfig> {
    if builtin {
        let config = ShortcutConfig::default();
        validation::validate(&config)?;
        return Ok(config);
    }
    Ok(load_config(path)?)
}

fn compile(
    config: Option<&Path>,
    output: Option<PathBuf>,
    builtin: bool,
    out: &mut impl Write,
) -> Result<()> {
    let declarations = declarations(config, builtin)?;
    let output = match output {
        Some(path) => {
            skhd_generator::generate_to_path(&declarations, &path)?;
            path
        }
        None => skhd_generator::generate(&declarations)?,
    };

    writeln!(
        out,
        "Wrote {} shortcuts to {}",
        declarations.shortcuts.len(),
        output.display()
    )?;
    Ok(())
}

fn check(config: Option<&Path>, builtin: bool, out: &mut impl Write) -> Result<()> {
    let declarations = declarations(config, builtin)?;
    let content = skhd_generator::compile(&declarations)?;
    out.write_all(content.as_bytes())?;
    Ok(())
}

fn list(input: Option<PathBuf>, json: bool, out: &mut impl Write) -> Result<()> {
    let input = match input {
        Some(path) => path,
        None => default_skhdrc_path()?,
    };
    let sections = list_shortcuts(&input)?;

    if json {
        let text = serde_json::to_string_pretty(&sections)
            .map_err(|e| SkhdError::Other(format!("failed to encode shortcuts: {e}")))?;
        writeln!(out, "{text}")?;
    } else {
        write_sections(&sections, out)?;
    }
    Ok(())
}

/// Section title, then one line per shortcut: description, shortest chord
/// and mode.
fn write_sections(sections: &[Section], out: &mut impl Write) -> std::io::Result<()> {
    for section in sections {
        writeln!(out, "{}", section.title.title())?;
        for shortcut in &section.shortcuts {
            let chord = shortcut.keys.first().map(String::as_str).unwrap_or("");
            writeln!(
                out,
                "  {:<40} {:<16} [{}]",
                shortcut.description, chord, shortcut.mode
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn menubar(icon: &str, out: &mut impl Write) -> Result<()> {
    let state = state_for(icon);
    writeln!(out, "{} {}", state.icon.symbol(), state.tooltip)?;
    Ok(())
}

fn init(path: Option<PathBuf>, force: bool, out: &mut impl Write) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => default_config_path()?,
    };

    if path.exists() && !force {
        return Err(SkhdError::Other(format!(
            "{} already exists, pass --force to overwrite",
            path.display()
        )));
    }

    save_config_to_path(&ShortcutConfig::default(), &path)?;
    tracing::info!(path = %path.display(), "Wrote built-in declarations");
    writeln!(out, "Wrote declarations to {}", path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skhd_common::CompileError;
    use tempfile::TempDir;

    fn run_to_string(command: Command) -> Result<String> {
        let mut out = Vec::new();
        run(command, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn check_prints_compiled_builtin() {
        let text = run_to_string(Command::Check {
            config: None,
            builtin: true,
        })
        .unwrap();
        let expected = skhd_generator::compile(&ShortcutConfig::default()).unwrap();
        assert_eq!(text, expected);
    }

    #[test]
    fn init_then_compile_then_list() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("shortcuts.toml");
        let output = dir.path().join(".skhdrc");

        run_to_string(Command::Init {
            config: Some(config.clone()),
            force: false,
        })
        .unwrap();

        let report = run_to_string(Command::Compile {
            config: Some(config),
            output: Some(output.clone()),
            builtin: false,
        })
        .unwrap();
        assert!(report.starts_with("Wrote 12 shortcuts"));

        let listing = run_to_string(Command::List {
            input: Some(output),
            json: false,
        })
        .unwrap();
        assert!(listing.starts_with("Open App\n"));
        assert!(listing.contains("Open Arc"));
        assert!(listing.contains("[launcher]"));
    }

    #[test]
    fn list_json_is_grouped() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join(".skhdrc");
        skhd_generator::generate_to_path(&ShortcutConfig::default(), &output).unwrap();

        let text = run_to_string(Command::List {
            input: Some(output),
            json: true,
        })
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json[0]["title"], "Open App");
        assert_eq!(json[0]["shortcuts"][0]["description"], "Open Arc");
    }

    #[test]
    fn list_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = run_to_string(Command::List {
            input: Some(dir.path().join(".skhdrc")),
            json: false,
        })
        .unwrap_err();
        assert!(err.to_string().starts_with("skhd config not found"));
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shortcuts.toml");
        std::fs::write(&path, "keep").unwrap();

        let err = run_to_string(Command::Init {
            config: Some(path.clone()),
            force: false,
        })
        .unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep");

        run_to_string(Command::Init {
            config: Some(path.clone()),
            force: true,
        })
        .unwrap();
        assert_ne!(std::fs::read_to_string(&path).unwrap(), "keep");
    }

    #[test]
    fn compile_with_duplicates_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("shortcuts.toml");
        let output = dir.path().join(".skhdrc");
        std::fs::write(
            &config,
            r#"
[[shortcuts]]
mode = "launcher"
modifiers = ["cmd", "shift"]
key = "x"
comment = "First"
action = { type = "open_app", name = "Finder" }

[[shortcuts]]
mode = "launcher"
modifiers = ["shift", "cmd"]
key = "x"
comment = "Second"
action = { type = "open_app", name = "Notes" }
"#,
        )
        .unwrap();

        let err = run_to_string(Command::Compile {
            config: Some(config),
            output: Some(output.clone()),
            builtin: false,
        })
        .unwrap_err();
        assert!(matches!(
            err,
            SkhdError::Compile(CompileError::DuplicateBindings(_))
        ));
        assert!(!output.exists());
    }

    #[test]
    fn menubar_prints_symbol_and_tooltip() {
        let text = run_to_string(Command::Menubar {
            icon: "launcher".into(),
        })
        .unwrap();
        assert_eq!(text, "⬆ Opening app\n");

        let text = run_to_string(Command::Menubar {
            icon: "unknown".into(),
        })
        .unwrap();
        assert_eq!(text, "○ Default state\n");
    }
}
