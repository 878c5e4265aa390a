//! In-memory storage backend
//!
//! Keeps documents in a map keyed by normalized path. Used when the style is
//! already in memory (embedding applications) and by tests.

use super::{StorageBackend, StorageError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Storage backend holding files in process memory
#[derive(Debug, Default)]
pub struct MemoryStorageBackend {
    files: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorageBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-populated with one file
    pub fn with_file(path: &str, content: impl Into<Vec<u8>>) -> Self {
        let backend = Self::new();
        if let Ok(mut files) = backend.files.lock() {
            files.insert(normalize(path), content.into());
        }
        backend
    }

    /// Paths currently stored, sorted
    pub fn paths(&self) -> Result<Vec<String>, StorageError> {
        let mut paths: Vec<String> = self.lock()?.keys().cloned().collect();
        paths.sort();
        Ok(paths)
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<u8>>>, StorageError> {
        self.files
            .lock()
            .map_err(|_| StorageError::BackendError("Memory storage lock poisoned".to_string()))
    }
}

fn normalize(path: &str) -> String {
    path.trim_start_matches('/').to_string()
}

#[async_trait(?Send)]
impl StorageBackend for MemoryStorageBackend {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        self.lock()?
            .get(&normalize(path))
            .cloned()
            .ok_or_else(|| StorageError::FileNotFound(path.to_string()))
    }

    async fn write_file(&self, path: &str, content: &[u8]) -> Result<(), StorageError> {
        self.lock()?.insert(normalize(path), content.to_vec());
        Ok(())
    }

    async fn file_exists(&self, path: &str) -> Result<bool, StorageError> {
        Ok(self.lock()?.contains_key(&normalize(path)))
    }
}
