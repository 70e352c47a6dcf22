//! Shortcut declarations for the skhd compiler.
//!
//! Provides the declaration schema (modes, transitions, shortcuts), the
//! binding renderer, the command builders, TOML loading and validation.
//! The built-in declarations are used whenever no file overrides them.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use skhd_config::{load_config, render::render_shortcut};
//!
//! let config = load_config(None).expect("failed to load declarations");
//! for shortcut in config.resolved_shortcuts() {
//!     println!("{}", render_shortcut(&shortcut));
//! }
//! ```

pub mod commands;
pub mod defaults;
pub mod render;
pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use render::{render_base_shortcut, render_shortcut, BindingKey};
pub use schema::{
    Action, LaunchType, Mode, ModeShortcut, ModeTransition, Shortcut, ShortcutConfig,
    ShortcutDecl, TransitionDecl,
};
pub use toml_writer::{config_to_toml, save_config_to_path};

use std::path::Path;

use skhd_common::ConfigError;

/// Load and validate declarations.
///
/// With a path, the file must exist. Without one, the platform default file
/// is used and created from the built-in declarations if missing.
pub fn load_config(path: Option<&Path>) -> Result<ShortcutConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}
