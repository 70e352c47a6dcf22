//! Declarations path resolution and default file creation.

use std::path::{Path, PathBuf};

use skhd_common::ConfigError;
use tracing::info;

use crate::schema::ShortcutConfig;
use crate::toml_writer::save_config_to_path;

pub const APP_DIR: &str = "skhd-shortcuts";
pub const CONFIG_FILE_NAME: &str = "shortcuts.toml";

/// Get the platform-specific default declarations path.
///
/// On macOS: `~/Library/Application Support/skhd-shortcuts/shortcuts.toml`
/// On Linux: `~/.config/skhd-shortcuts/shortcuts.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join(APP_DIR).join(CONFIG_FILE_NAME))
}

/// Write the built-in declarations to `path`.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    save_config_to_path(&ShortcutConfig::default(), path)?;
    info!("created default declarations at {}", path.display());
    Ok(())
}
