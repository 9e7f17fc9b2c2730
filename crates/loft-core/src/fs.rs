use std::path::Path;

use crate::{error::LoftError, LoftResult};

/// Creates a directory structure if it doesn't exist.
///
/// If the path already exists as a directory this does nothing. If it exists
/// but is not a directory, an error is returned.
pub fn ensure_dir_exists<P: AsRef<Path>>(path: P) -> LoftResult<()> {
    let path = path.as_ref();
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|err| LoftError::Directory {
            path: path.to_path_buf(),
            action: "create",
            source: err,
        })?;
    } else if !path.is_dir() {
        return Err(LoftError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("c");

        ensure_dir_exists(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn existing_directory_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        ensure_dir_exists(dir.path()).unwrap();
        ensure_dir_exists(dir.path()).unwrap();
    }

    #[test]
    fn existing_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("occupied");
        std::fs::write(&path, b"x").unwrap();

        let err = ensure_dir_exists(&path).unwrap_err();
        assert!(matches!(err, LoftError::NotADirectory { .. }));
    }
}
