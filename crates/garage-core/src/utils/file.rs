//! File system helpers

use crate::error::StorageError;
use std::path::Path;

/// Ensure a directory exists, creating it and its parents if necessary
pub fn ensure_directory_exists<P: AsRef<Path>>(path: P) -> Result<(), StorageError> {
    let path = path.as_ref();
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|source| StorageError::FileIo {
            path: path.to_string_lossy().to_string(),
            source,
        })?;
    }
    Ok(())
}

/// Ensure the parent directory of a file path exists
pub fn ensure_parent_exists<P: AsRef<Path>>(file: P) -> Result<(), StorageError> {
    match file.as_ref().parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory_exists(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_directory_exists_creates_new_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let test_path = temp_dir.path().join("garage").join("data");

        assert!(!test_path.exists());
        ensure_directory_exists(&test_path).expect("Failed to create new directory");
        assert!(test_path.is_dir());
    }

    #[test]
    fn test_ensure_directory_exists_handles_existing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        ensure_directory_exists(temp_dir.path()).expect("Should handle existing directory");
    }

    #[test]
    fn test_ensure_parent_exists() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = temp_dir.path().join("a").join("database.sqlite");
        ensure_parent_exists(&file).expect("parent created");
        assert!(temp_dir.path().join("a").is_dir());
        assert!(!file.exists());

        ensure_parent_exists("database.sqlite").expect("bare file name");
    }
}
