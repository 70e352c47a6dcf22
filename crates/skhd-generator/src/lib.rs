//! Compiler from shortcut declarations to an skhd configuration file.
//!
//! Generation is all-or-nothing: the text is built completely in memory and
//! only then written, so a failed compile leaves the previous file untouched.

pub mod compile;
pub mod content;
pub mod duplicates;
pub mod writer;

pub use compile::compile;
pub use content::{ContentBuilder, Spacing};
pub use duplicates::validate_bindings;
pub use writer::write_atomic;

use std::path::{Path, PathBuf};

use skhd_common::paths::default_skhdrc_path;
use skhd_common::CompileError;
use skhd_config::ShortcutConfig;

/// Compile and write to the default `~/.skhdrc`.
pub fn generate(config: &ShortcutConfig) -> Result<PathBuf, CompileError> {
    let path = default_skhdrc_path().map_err(|source| CompileError::Write {
        path: PathBuf::from(skhd_common::paths::SKHDRC_FILE_NAME),
        source,
    })?;
    generate_to_path(config, &path)?;
    Ok(path)
}

/// Compile and write to `path`.
pub fn generate_to_path(config: &ShortcutConfig, path: &Path) -> Result<(), CompileError> {
    let content = compile(config)?;
    write_atomic(path, &content)
}
