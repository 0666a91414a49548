//! File-backed [`ConfigStore`]: one CSV file, fully replaced on every save.
//!
//! The write is a plain truncate-and-write (`tokio::fs::write`).  There is no
//! temp-file-and-rename step and no lock, so two saves racing on the same
//! path end with whichever finished last.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::application::{ConfigStore, StoreError};
use crate::domain::ServerConfig;

/// Writes tables to `<folder>/<file_name>`.
#[derive(Debug, Clone)]
pub struct CsvFileStore {
    folder: PathBuf,
    path: PathBuf,
}

impl CsvFileStore {
    pub fn new(folder: impl Into<PathBuf>, file_name: &str) -> Self {
        let folder = folder.into();
        let path = folder.join(file_name);
        Self { folder, path }
    }

    /// Builds the store for the save location named in `config`.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.save_folder.clone(), &config.save_file_name)
    }

    /// Full path of the table file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the save folder (and parents) if it does not exist yet.
    ///
    /// Idempotent: an existing folder is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CreateFolder`] if the folder cannot be created,
    /// e.g. because a regular file already occupies the path.
    pub async fn ensure_folder(&self) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.folder)
            .await
            .map_err(|source| StoreError::CreateFolder {
                path: self.folder.clone(),
                source,
            })
    }
}

#[async_trait]
impl ConfigStore for CsvFileStore {
    fn destination(&self) -> String {
        self.path.display().to_string()
    }

    async fn replace_all(&self, contents: Vec<u8>) -> Result<(), StoreError> {
        // The folder may have been removed while the server was running.
        self.ensure_folder().await?;

        let len = contents.len();
        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;

        debug!("wrote {len} bytes to {}", self.path.display());
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replace_all_creates_missing_folder() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let store = CsvFileStore::new(dir.path().join("SwapDatas"), "InputDatas.csv");

        // Act
        store.replace_all(b"a,b,c\r\n".to_vec()).await.unwrap();

        // Assert
        let written = std::fs::read(dir.path().join("SwapDatas/InputDatas.csv")).unwrap();
        assert_eq!(written, b"a,b,c\r\n");
    }

    #[tokio::test]
    async fn test_replace_all_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvFileStore::new(dir.path(), "t.csv");

        store.replace_all(b"first, much longer contents\r\n".to_vec()).await.unwrap();
        store.replace_all(b"second\r\n".to_vec()).await.unwrap();

        assert_eq!(std::fs::read(store.path()).unwrap(), b"second\r\n");
    }

    #[tokio::test]
    async fn test_ensure_folder_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvFileStore::new(dir.path().join("a/b"), "t.csv");

        store.ensure_folder().await.unwrap();
        store.ensure_folder().await.unwrap();

        assert!(dir.path().join("a/b").is_dir());
    }

    #[tokio::test]
    async fn test_folder_blocked_by_file_is_create_folder_error() {
        // Arrange: a regular file where the folder should be
        let dir = tempfile::tempdir().unwrap();
        let blocked = dir.path().join("SwapDatas");
        std::fs::write(&blocked, b"not a folder").unwrap();
        let store = CsvFileStore::new(&blocked, "InputDatas.csv");

        // Act
        let err = store.replace_all(b"x".to_vec()).await.unwrap_err();

        // Assert
        assert!(matches!(err, StoreError::CreateFolder { .. }));
    }

    #[tokio::test]
    async fn test_file_path_taken_by_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("InputDatas.csv")).unwrap();
        let store = CsvFileStore::new(dir.path(), "InputDatas.csv");

        let err = store.replace_all(b"x".to_vec()).await.unwrap_err();

        assert!(matches!(err, StoreError::Write { .. }));
    }

    #[test]
    fn test_destination_is_display_of_path() {
        let store = CsvFileStore::from_config(&ServerConfig::default());
        assert_eq!(store.destination(), store.path().display().to_string());
        assert!(store.path().ends_with("InputDatas.csv"));
    }
}
