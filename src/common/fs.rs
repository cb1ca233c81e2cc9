//! Common file system operations with unified error handling

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{OcpackError, Result, file_write_failed};

fn write_error(path: &Path, e: std::io::Error) -> OcpackError {
    file_write_failed(path.display().to_string(), e.to_string())
}

/// Ensure a directory exists, creating it and any missing ancestors
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| write_error(path, e))
}

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
    }
    Ok(())
}

/// Write a text file, creating parent directories as needed.
/// Overwrites any existing file at the path.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, content).map_err(|e| write_error(path, e))
}

/// Copy a directory tree recursively into `dst`, creating it as needed.
///
/// Walks `src` top-down so every directory exists before the files under
/// it are copied. Existing files in `dst` are overwritten.
pub fn copy_dir_recursive<P1, P2>(src: P1, dst: P2) -> Result<()>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
{
    let src_ref = src.as_ref();
    let dst_ref = dst.as_ref();

    for entry in WalkDir::new(src_ref) {
        let entry = entry.map_err(|e| OcpackError::IoError {
            message: e.to_string(),
        })?;
        let relative = entry
            .path()
            .strip_prefix(src_ref)
            .unwrap_or_else(|_| entry.path());
        let target = dst_ref.join(relative);

        if entry.file_type().is_dir() {
            ensure_dir(&target)?;
        } else {
            std::fs::copy(entry.path(), &target).map_err(|e| write_error(&target, e))?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_parent_dir() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("subdir/nested/file.txt");

        ensure_parent_dir(&file_path).unwrap();
        assert!(file_path.parent().unwrap().exists());
    }

    #[test]
    fn test_write_text_creates_parents() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("a/b/note.txt");

        write_text(&file_path, "hello\n").unwrap();
        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "hello\n");
    }

    #[test]
    fn test_write_text_overwrites() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("note.txt");

        write_text(&file_path, "first").unwrap();
        write_text(&file_path, "second").unwrap();
        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "second");
    }

    #[test]
    fn test_copy_dir_recursive() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        std::fs::create_dir_all(src.join("sub")).unwrap();
        std::fs::write(src.join("top.txt"), "top").unwrap();
        std::fs::write(src.join("sub/inner.txt"), "inner").unwrap();

        let dst = temp.path().join("dst");
        copy_dir_recursive(&src, &dst).unwrap();

        assert_eq!(std::fs::read_to_string(dst.join("top.txt")).unwrap(), "top");
        assert_eq!(
            std::fs::read_to_string(dst.join("sub/inner.txt")).unwrap(),
            "inner"
        );
    }

    #[test]
    fn test_copy_dir_recursive_missing_source() {
        let temp = TempDir::new().unwrap();
        let result = copy_dir_recursive(temp.path().join("missing"), temp.path().join("dst"));
        assert!(result.is_err());
    }
}
