//! Well-known file locations.

use std::io;
use std::path::PathBuf;

/// File name skhd reads its configuration from.
pub const SKHDRC_FILE_NAME: &str = ".skhdrc";

const NO_HOME_DIR: &str = "could not determine home directory";

/// `$HOME/.skhdrc`, where skhd looks for its configuration.
pub fn default_skhdrc_path() -> io::Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(SKHDRC_FILE_NAME))
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, NO_HOME_DIR))
}
