//! Style loading functionality
//!
//! Loads style documents from storage backends and parses them into
//! `StyleDocument`s.

use crate::models::StyleDocument;
use crate::storage::{StorageBackend, StorageError};
use tracing::info;

/// Style loader that uses a storage backend
pub struct StyleLoader<B: StorageBackend> {
    storage: B,
}

impl<B: StorageBackend> StyleLoader<B> {
    /// Create a new style loader with the given storage backend
    pub fn new(storage: B) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &B {
        &self.storage
    }

    /// Load and parse a style document
    ///
    /// Missing files surface as `StorageError::FileNotFound`; content that is
    /// not a layered style document surfaces as `StorageError::SerializationError`.
    pub async fn load_style(&self, path: &str) -> Result<StyleDocument, StorageError> {
        let content = self.storage.read_file(path).await?;
        let document = StyleDocument::from_slice(&content).map_err(|e| {
            StorageError::SerializationError(format!("Failed to parse style {}: {}", path, e))
        })?;

        info!(
            "Loaded style '{}' with {} layers from {}",
            document.name().unwrap_or("<unnamed>"),
            document.layers().len(),
            path
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorageBackend;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    #[test]
    fn test_load_style() {
        runtime().block_on(async {
            let backend = MemoryStorageBackend::with_file(
                "osm_bright.json",
                r#"{"name": "OSM Bright", "layers": [{"id": "bg", "type": "background"}]}"#,
            );
            let loader = StyleLoader::new(backend);

            let document = loader.load_style("osm_bright.json").await.unwrap();
            assert_eq!(document.name(), Some("OSM Bright"));
            assert_eq!(document.layers().len(), 1);
        });
    }

    #[test]
    fn test_load_errors() {
        runtime().block_on(async {
            let backend = MemoryStorageBackend::with_file("broken.json", "{\"name\": \"x\"}");
            let loader = StyleLoader::new(backend);

            let result = loader.load_style("missing.json").await;
            assert!(matches!(result, Err(StorageError::FileNotFound(_))));

            let result = loader.load_style("broken.json").await;
            assert!(matches!(result, Err(StorageError::SerializationError(msg)) if msg.contains("layers")));
        });
    }
}
