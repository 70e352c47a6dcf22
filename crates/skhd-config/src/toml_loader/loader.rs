//! Core TOML loading: read from path or platform default.

use std::path::Path;

use skhd_common::ConfigError;
use tracing::info;

use crate::schema::ShortcutConfig;

use super::paths::{create_default_config, default_config_path};

/// Load declarations from a specific TOML file path.
///
/// Missing top-level sections fall back to the built-in declarations.
/// No validation happens here; see [`crate::validation::validate`].
pub fn load_from_path(path: &Path) -> Result<ShortcutConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: ShortcutConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!(
        modes = config.modes.len(),
        shortcuts = config.shortcuts.len(),
        "loaded declarations from {}",
        path.display()
    );
    Ok(config)
}

/// Load declarations from the platform-specific default path.
///
/// If the file does not exist, writes the built-in declarations there and
/// returns them.
pub fn load_default() -> Result<ShortcutConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no declarations found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(ShortcutConfig::default())
        }
        Err(e) => Err(e),
    }
}
