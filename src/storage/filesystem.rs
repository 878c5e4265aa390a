//! File system storage backend
//!
//! Reads and writes style documents below a base directory.
//!
//! ## Security
//!
//! Paths containing ".." are rejected, and resolved paths of existing files
//! (or of the parent directory for new files) must stay within the base directory.

use super::{StorageBackend, StorageError};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// File system storage backend
#[derive(Debug, Clone)]
pub struct FileSystemStorageBackend {
    base_path: PathBuf,
}

impl FileSystemStorageBackend {
    /// Create a new file system storage backend
    ///
    /// # Example
    ///
    /// ```rust
    /// use circuit_style::storage::filesystem::FileSystemStorageBackend;
    ///
    /// let backend = FileSystemStorageBackend::new("/srv/styles");
    /// ```
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn resolve_path(&self, path: &str) -> Result<PathBuf, StorageError> {
        let relative = path.trim_start_matches('/');
        if relative.is_empty() {
            return Err(StorageError::PermissionDenied(
                "Empty path not allowed".to_string(),
            ));
        }

        let full = self.base_path.join(relative);
        if relative.contains("..")
            || full
                .components()
                .any(|component| matches!(component, Component::ParentDir))
        {
            return Err(StorageError::PermissionDenied(
                "Path traversal (..) not allowed".to_string(),
            ));
        }

        // New files are checked through their closest existing ancestor.
        let existing = full.ancestors().find(|candidate| candidate.exists());
        if let Some(existing) = existing {
            let canonical = existing
                .canonicalize()
                .map_err(|e| StorageError::IoError(format!("Failed to resolve path: {}", e)))?;
            let base_canonical = self
                .base_path
                .canonicalize()
                .unwrap_or_else(|_| self.base_path.clone());

            if self.base_path.exists() && !canonical.starts_with(&base_canonical) {
                return Err(StorageError::PermissionDenied(
                    "Path escapes base directory".to_string(),
                ));
            }
        }

        Ok(full)
    }
}

#[async_trait(?Send)]
impl StorageBackend for FileSystemStorageBackend {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        let full_path = self.resolve_path(path)?;
        debug!("Reading {}", full_path.display());

        fs::read(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::FileNotFound(path.to_string())
            } else {
                StorageError::IoError(format!("Failed to read file {}: {}", path, e))
            }
        })
    }

    async fn write_file(&self, path: &str, content: &[u8]) -> Result<(), StorageError> {
        let full_path = self.resolve_path(path)?;

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::IoError(format!("Failed to create directory for {}: {}", path, e))
            })?;
        }

        debug!("Writing {} bytes to {}", content.len(), full_path.display());
        fs::write(&full_path, content)
            .await
            .map_err(|e| StorageError::IoError(format!("Failed to write file {}: {}", path, e)))
    }

    async fn file_exists(&self, path: &str) -> Result<bool, StorageError> {
        let full_path = self.resolve_path(path)?;

        match fs::metadata(&full_path).await {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::IoError(format!(
                "Failed to check file existence {}: {}",
                path, e
            ))),
        }
    }
}
