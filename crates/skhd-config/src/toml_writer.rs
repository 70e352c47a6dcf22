//! Write declarations to TOML on disk.
//!
//! Supports atomic writes (write to `.tmp`, then rename) to prevent
//! corruption if the process crashes mid-write.

use std::path::Path;

use skhd_common::ConfigError;

use crate::schema::ShortcutConfig;

const HEADER: &str = "\
# skhd shortcut declarations
# Compile with `skhdgen compile`; missing top-level sections use the built-in set.
# Actions: open, open_app, open_url, external_command, ai_command, alfred, keypress.

";

// =============================================================================
// PUBLIC API
// =============================================================================

/// Serialize declarations to commented, pretty-printed TOML.
pub fn config_to_toml(config: &ShortcutConfig) -> Result<String, ConfigError> {
    let body = toml::to_string_pretty(config).map_err(|e| {
        ConfigError::ParseError(format!("failed to serialize declarations to TOML: {e}"))
    })?;
    Ok(format!("{HEADER}{body}"))
}

/// Write declarations to a specific path.
///
/// Creates parent directories if they don't exist. Uses atomic write
/// (write to `.tmp` file, then rename) to prevent partial writes.
pub fn save_config_to_path(config: &ShortcutConfig, path: &Path) -> Result<(), ConfigError> {
    let toml_str = config_to_toml(config)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, &toml_str).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write declarations to {}: {e}",
            tmp_path.display()
        ))
    })?;

    std::fs::rename(&tmp_path, path).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to move declarations into place at {}: {e}",
            path.display()
        ))
    })?;

    tracing::debug!(path = %path.display(), "Declarations saved to disk");
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Action, LaunchType};
    use tempfile::TempDir;

    #[test]
    fn config_to_toml_starts_with_header() {
        let toml_str = config_to_toml(&ShortcutConfig::default()).unwrap();
        assert!(toml_str.starts_with("# skhd shortcut declarations"));
        assert!(toml_str.contains("menu_bar_extension"));
        assert!(toml_str.contains("open_app"));
    }

    #[test]
    fn save_config_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shortcuts.toml");

        let mut config = ShortcutConfig::default();
        config.shortcuts[0].action = Action::AiCommand {
            command: "me/ai/summarize".into(),
            arguments: [("tone".to_string(), "short".to_string())].into(),
            launch_type: Some(LaunchType::Background),
        };
        save_config_to_path(&config, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: ShortcutConfig = toml::from_str(&contents).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn save_config_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join("shortcuts.toml");

        save_config_to_path(&ShortcutConfig::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_config_cleans_up_tmp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shortcuts.toml");

        save_config_to_path(&ShortcutConfig::default(), &path).unwrap();

        let tmp_path = path.with_extension("toml.tmp");
        assert!(
            !tmp_path.exists(),
            "tmp file should be cleaned up after rename"
        );
    }
}
