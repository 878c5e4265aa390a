//! Style saving functionality
//!
//! Saves style documents to storage backends as pretty-printed JSON.

use crate::models::StyleDocument;
use crate::storage::{StorageBackend, StorageError};
use tracing::info;

/// Style saver that uses a storage backend
pub struct StyleSaver<B: StorageBackend> {
    storage: B,
}

impl<B: StorageBackend> StyleSaver<B> {
    /// Create a new style saver with the given storage backend
    pub fn new(storage: B) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &B {
        &self.storage
    }

    /// Serialize and write a style document, replacing any previous file
    pub async fn save_style(&self, path: &str, document: &StyleDocument) -> Result<(), StorageError> {
        let content = document.to_json_pretty().map_err(|e| {
            StorageError::SerializationError(format!("Failed to serialize style: {}", e))
        })?;

        self.storage.write_file(path, content.as_bytes()).await?;

        info!(
            "Saved style '{}' with {} layers to {}",
            document.name().unwrap_or("<unnamed>"),
            document.layers().len(),
            path
        );
        Ok(())
    }
}
