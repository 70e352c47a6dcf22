//! Persist generated configuration atomically.

use std::path::{Path, PathBuf};

use skhd_common::CompileError;

fn write_err(path: &Path) -> impl FnOnce(std::io::Error) -> CompileError {
    let path = path.to_path_buf();
    move |source| CompileError::Write { path, source }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace the file at `path` with `content`.
///
/// Writes a sibling `.tmp` file and renames it over the target, so readers
/// never observe a partial file.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), CompileError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err(parent))?;
    }

    let tmp = tmp_path(path);
    std::fs::write(&tmp, content).map_err(write_err(&tmp))?;
    if let Err(source) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(CompileError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    tracing::info!(path = %path.display(), bytes = content.len(), "Wrote skhd configuration");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path(Path::new("/home/me/.skhdrc")),
            PathBuf::from("/home/me/.skhdrc.tmp")
        );
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".skhdrc");
        std::fs::write(&path, "old content that is longer than the new one").unwrap();

        write_atomic(&path, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(".skhdrc");
        write_atomic(&path, "# Modes\n").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unwritable_target_reports_path() {
        let dir = TempDir::new().unwrap();
        // A directory in place of the target makes the rename fail.
        let path = dir.path().join(".skhdrc");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();

        let err = write_atomic(&path, "content").unwrap_err();
        assert!(matches!(err, CompileError::Write { .. }));
        assert!(!tmp_path(&path).exists());
    }
}
