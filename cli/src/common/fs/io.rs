//! # CSec Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Thin wrappers over `std::fs` that attach `anyhow` context to failures.
//! The keyword catalog and profile loaders read through `read_file_to_string`;
//! the profile is persisted with `write_string_to_file`, which creates the
//! parent directory first (profiles default to a per-user config directory
//! that may not exist yet). `remove_file_if_exists` backs `csec profile reset`.
//!
use crate::core::error::{CsecError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at `path`, creating parents as needed.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if the
/// directory cannot be created.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        // `Path::new("profile.json").parent()` is an empty path: the cwd.
        return Ok(());
    }
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(CsecError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes `content` to `path`, overwriting it and creating the parent directory.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}

/// Removes a file. Returns `Ok(false)` when there was nothing to remove.
pub fn remove_file_if_exists(path: &Path) -> Result<bool> {
    if !path.exists() {
        debug!("Nothing to remove at {:?}", path);
        return Ok(false);
    }
    if !path.is_file() {
        anyhow::bail!(CsecError::FileSystem(format!(
            "Refusing to remove non-file path: {:?}",
            path
        )));
    }
    fs::remove_file(path).with_context(|| format!("Failed to remove file {:?}", path))?;
    info!("Removed file: {:?}", path);
    Ok(true)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_exists_creates_new() -> Result<()> {
        let base_dir = tempdir()?;
        let new_dir = base_dir.path().join("new/subdir");
        assert!(!new_dir.exists());
        ensure_dir_exists(&new_dir)?;
        assert!(new_dir.is_dir());
        Ok(())
    }

    #[test]
    fn test_ensure_dir_exists_path_is_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("a_file.txt");
        fs::write(&file_path, "hello")?;
        let result = ensure_dir_exists(&file_path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Path exists but is not a directory"));
        Ok(())
    }

    #[test]
    fn test_ensure_dir_exists_accepts_empty_relative_parent() -> Result<()> {
        ensure_dir_exists(Path::new(""))?;
        Ok(())
    }

    #[test]
    fn test_read_write_string_to_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("deep/profile.json");
        let content = "{ \"name\": \"Ada\" }";
        write_string_to_file(&file_path, content)?;
        assert_eq!(read_file_to_string(&file_path)?, content);
        Ok(())
    }

    #[test]
    fn test_read_file_not_found() -> Result<()> {
        let base_dir = tempdir()?;
        let result = read_file_to_string(&base_dir.path().join("nonexistent.json"));
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_remove_file_if_exists() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("profile.json");
        assert!(!remove_file_if_exists(&file_path)?);
        fs::write(&file_path, "{}")?;
        assert!(remove_file_if_exists(&file_path)?);
        assert!(!file_path.exists());
        assert!(remove_file_if_exists(base_dir.path()).is_err());
        Ok(())
    }
}
