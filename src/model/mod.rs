//! Style loading and saving functionality
//!
//! Provides high-level operations for reading and writing style documents
//! using storage backends.

pub mod loader;
pub mod saver;

pub use loader::StyleLoader;
pub use saver::StyleSaver;
