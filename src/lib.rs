//! Circuit Style - derives a grayscale circuit-style map style from a
//! vector-tile style document
//!
//! Provides unified interfaces for:
//! - File operations (via storage backends)
//! - Style loading/saving
//! - Layer classification and category styling
//! - Palette configuration

pub mod model;
pub mod models;
pub mod storage;
pub mod transform;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
#[cfg(feature = "native-fs")]
pub use storage::filesystem::FileSystemStorageBackend;
pub use storage::memory::MemoryStorageBackend;
pub use storage::{StorageBackend, StorageError};

pub use model::{StyleLoader, StyleSaver};
pub use models::{DocumentError, Layer, LayerType, StyleDocument, ZoomStops};
pub use transform::{
    Category, CategoryKind, ConfigError, DERIVED_STYLE_NAME, Palette, StyleTransformer,
    TransformConfig, TransformReport, TransformResult, classify, transform,
};
