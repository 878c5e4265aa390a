//! Summary of one transformation run

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::classifier::{Category, CategoryKind};

/// What a transformation did, per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformReport {
    /// Number of layers in the document
    pub total_layers: usize,
    /// Layers whose content differs from the input
    pub changed_layers: usize,
    /// Layer count per category
    pub by_category: BTreeMap<CategoryKind, usize>,
    /// Ids of layers no rule matched, in document order
    pub unclassified: Vec<String>,
}

impl TransformReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one processed layer
    pub fn record(&mut self, id: &str, category: Category, changed: bool) {
        self.total_layers += 1;
        if changed {
            self.changed_layers += 1;
        }
        *self.by_category.entry(category.kind()).or_insert(0) += 1;
        if category == Category::Unclassified {
            self.unclassified.push(id.to_string());
        }
    }

    pub fn count(&self, kind: CategoryKind) -> usize {
        self.by_category.get(&kind).copied().unwrap_or(0)
    }

    /// Layers that matched some category
    pub fn classified_layers(&self) -> usize {
        self.total_layers - self.unclassified.len()
    }
}
