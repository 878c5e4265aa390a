//! Style transformation engine
//!
//! Derives a circuit-style map style from a layered style document. Each layer
//! is classified into a semantic category and the category's overrides are
//! merged into a fresh copy of the layer; the input document is never mutated.
//!
//! ## Example
//!
//! ```rust,ignore
//! use circuit_style::models::StyleDocument;
//! use circuit_style::transform::StyleTransformer;
//!
//! let document = StyleDocument::from_json_str(&std::fs::read_to_string("osm_bright.json")?)?;
//! let result = StyleTransformer::new().transform(&document);
//! println!("{}", result.document.to_json_pretty()?);
//! ```

pub mod classifier;
mod config;
mod error;
pub mod merge;
mod report;
pub mod rules;

pub use classifier::{Category, CategoryKind, PlaceRole, RoadRole, RoadTier, classify};
pub use config::{
    BackgroundPalette, BoundaryPalette, BuildingPalette, DERIVED_STYLE_NAME, LandPalette,
    Palette, PerTier, PlacePalette, PlaceTextStyle, RoadLabelPalette, RoadPalette,
    TransformConfig, TransformConfigBuilder, WaterPalette,
};
pub use error::{ConfigError, ConfigResult};
pub use report::TransformReport;
pub use rules::{CategoryRule, rule_for};

use serde::Serialize;
use tracing::{debug, info};

use crate::models::{Layer, StyleDocument};

/// Derived document together with what happened to it
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub document: StyleDocument,
    pub report: TransformReport,
}

/// Category assigned to one layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerClassification {
    pub id: String,
    #[serde(flatten)]
    pub category: Category,
}

/// Applies the category rules of a configuration to style documents
#[derive(Debug, Clone, Default)]
pub struct StyleTransformer {
    config: TransformConfig,
}

impl StyleTransformer {
    /// Create a transformer with the default circuit palette
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transformer with a custom configuration
    pub fn with_config(config: TransformConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Derive a new document. Layer count, order and ids are preserved.
    pub fn transform(&self, document: &StyleDocument) -> TransformResult {
        let mut report = TransformReport::new();

        let layers = document
            .layers()
            .iter()
            .map(|layer| {
                let (derived, category) = self.transform_layer(layer);
                let changed = derived != *layer;
                debug!("Layer '{}' -> {} (changed: {})", layer.id(), category, changed);
                report.record(layer.id(), category, changed);
                derived
            })
            .collect();

        let mut derived = document.with_layers(layers);
        derived.set_name(self.config.style_name.as_str());

        info!(
            "Transformed {} layers ({} changed, {} unclassified) into '{}'",
            report.total_layers,
            report.changed_layers,
            report.unclassified.len(),
            self.config.style_name
        );

        TransformResult {
            document: derived,
            report,
        }
    }

    /// Classify one layer and build its derived copy
    pub fn transform_layer(&self, layer: &Layer) -> (Layer, Category) {
        let category = classify(layer);
        let mut derived = layer.clone();
        rule_for(category, &self.config.palette).apply(&mut derived);
        (derived, category)
    }

    /// Category of every layer, in document order, without transforming anything
    pub fn classify_document(&self, document: &StyleDocument) -> Vec<LayerClassification> {
        document
            .layers()
            .iter()
            .map(|layer| LayerClassification {
                id: layer.id().to_string(),
                category: classify(layer),
            })
            .collect()
    }
}

/// Transform a document with the default configuration
pub fn transform(document: &StyleDocument) -> StyleDocument {
    StyleTransformer::new().transform(document).document
}
