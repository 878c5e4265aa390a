//! Style document models
//!
//! Defines the style document, its layers and zoom interpolation values.

pub mod document;
pub mod layer;
pub mod stops;

pub use document::{DocumentError, StyleDocument};
pub use layer::{Layer, LayerType, PropertyContainer};
pub use stops::{StopsError, ZoomStops};
