//! Layer classification
//!
//! Maps a layer to exactly one semantic category using an ordered rule table.
//! The first rule whose predicate matches wins; a layer matching none is
//! unclassified. Road and place layers are then refined into sub-roles from
//! substrings of their `id`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Layer, LayerType};

/// Road class names treated as major roads
const MAJOR_ROAD_CLASSES: &[&str] = &["trunk", "primary", "secondary", "tertiary"];

/// Coarse category, without sub-roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryKind {
    Background,
    Land,
    WaterFill,
    WaterLine,
    Road,
    RoadLabel,
    PlaceLabel,
    Building,
    Boundary,
    Unclassified,
}

impl CategoryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryKind::Background => "background",
            CategoryKind::Land => "land",
            CategoryKind::WaterFill => "water-fill",
            CategoryKind::WaterLine => "water-line",
            CategoryKind::Road => "road",
            CategoryKind::RoadLabel => "road-label",
            CategoryKind::PlaceLabel => "place-label",
            CategoryKind::Building => "building",
            CategoryKind::Boundary => "boundary",
            CategoryKind::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a road layer draws the outline or the line itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoadRole {
    Casing,
    Fill,
}

impl RoadRole {
    pub fn from_id(id: &str) -> Self {
        if id.contains("casing") {
            RoadRole::Casing
        } else {
            RoadRole::Fill
        }
    }
}

/// Road class tier derived from the layer id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoadTier {
    Motorway,
    /// trunk, primary, secondary, tertiary
    Major,
    /// residential, service and everything else
    Minor,
}

impl RoadTier {
    pub fn from_id(id: &str) -> Self {
        if id.contains("motorway") {
            RoadTier::Motorway
        } else if MAJOR_ROAD_CLASSES.iter().any(|class| id.contains(class)) {
            RoadTier::Major
        } else {
            RoadTier::Minor
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaceRole {
    City,
    Other,
}

impl PlaceRole {
    pub fn from_id(id: &str) -> Self {
        if id.contains("city") {
            PlaceRole::City
        } else {
            PlaceRole::Other
        }
    }
}

/// Category of a layer, including sub-roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum Category {
    Background,
    Land,
    WaterFill,
    WaterLine,
    Road { role: RoadRole, tier: RoadTier },
    RoadLabel,
    PlaceLabel { role: PlaceRole },
    Building,
    Boundary,
    Unclassified,
}

impl Category {
    pub fn kind(&self) -> CategoryKind {
        match self {
            Category::Background => CategoryKind::Background,
            Category::Land => CategoryKind::Land,
            Category::WaterFill => CategoryKind::WaterFill,
            Category::WaterLine => CategoryKind::WaterLine,
            Category::Road { .. } => CategoryKind::Road,
            Category::RoadLabel => CategoryKind::RoadLabel,
            Category::PlaceLabel { .. } => CategoryKind::PlaceLabel,
            Category::Building => CategoryKind::Building,
            Category::Boundary => CategoryKind::Boundary,
            Category::Unclassified => CategoryKind::Unclassified,
        }
    }

    /// Attach sub-roles to a coarse category
    fn refine(kind: CategoryKind, layer: &Layer) -> Self {
        let id = layer.id();
        match kind {
            CategoryKind::Background => Category::Background,
            CategoryKind::Land => Category::Land,
            CategoryKind::WaterFill => Category::WaterFill,
            CategoryKind::WaterLine => Category::WaterLine,
            CategoryKind::Road => Category::Road {
                role: RoadRole::from_id(id),
                tier: RoadTier::from_id(id),
            },
            CategoryKind::RoadLabel => Category::RoadLabel,
            CategoryKind::PlaceLabel => Category::PlaceLabel {
                role: PlaceRole::from_id(id),
            },
            CategoryKind::Building => Category::Building,
            CategoryKind::Boundary => Category::Boundary,
            CategoryKind::Unclassified => Category::Unclassified,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Road { role, tier } => {
                let role = match role {
                    RoadRole::Casing => "casing",
                    RoadRole::Fill => "fill",
                };
                let tier = match tier {
                    RoadTier::Motorway => "motorway",
                    RoadTier::Major => "major",
                    RoadTier::Minor => "minor",
                };
                write!(f, "road-{}/{}", role, tier)
            }
            Category::PlaceLabel { role } => match role {
                PlaceRole::City => f.write_str("place-label/city"),
                PlaceRole::Other => f.write_str("place-label/other"),
            },
            other => f.write_str(other.kind().as_str()),
        }
    }
}

/// One entry of the classification table
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    pub kind: CategoryKind,
    /// Human-readable form of the predicate
    pub test: &'static str,
    matches: fn(&Layer) -> bool,
}

impl ClassificationRule {
    pub fn matches(&self, layer: &Layer) -> bool {
        (self.matches)(layer)
    }
}

/// Classification rules in precedence order
pub const RULES: &[ClassificationRule] = &[
    ClassificationRule {
        kind: CategoryKind::Background,
        test: "type == background",
        matches: is_background,
    },
    ClassificationRule {
        kind: CategoryKind::Land,
        test: "id contains landcover or landuse",
        matches: is_land,
    },
    ClassificationRule {
        kind: CategoryKind::WaterFill,
        test: "id contains water and type == fill",
        matches: is_water_fill,
    },
    ClassificationRule {
        kind: CategoryKind::WaterLine,
        test: "id contains waterway and type == line",
        matches: is_water_line,
    },
    ClassificationRule {
        kind: CategoryKind::Road,
        test: "source-layer == transportation",
        matches: is_road,
    },
    ClassificationRule {
        kind: CategoryKind::RoadLabel,
        test: "source-layer == transportation_name",
        matches: is_road_label,
    },
    ClassificationRule {
        kind: CategoryKind::PlaceLabel,
        test: "source-layer == place",
        matches: is_place_label,
    },
    ClassificationRule {
        kind: CategoryKind::Building,
        test: "source-layer == building",
        matches: is_building,
    },
    ClassificationRule {
        kind: CategoryKind::Boundary,
        test: "source-layer == boundary",
        matches: is_boundary,
    },
];

fn is_background(layer: &Layer) -> bool {
    layer.layer_type() == LayerType::Background
}

fn is_land(layer: &Layer) -> bool {
    let id = layer.id();
    id.contains("landcover") || id.contains("landuse")
}

fn is_water_fill(layer: &Layer) -> bool {
    layer.id().contains("water") && layer.layer_type() == LayerType::Fill
}

fn is_water_line(layer: &Layer) -> bool {
    layer.id().contains("waterway") && layer.layer_type() == LayerType::Line
}

fn is_road(layer: &Layer) -> bool {
    layer.source_layer() == Some("transportation")
}

fn is_road_label(layer: &Layer) -> bool {
    layer.source_layer() == Some("transportation_name")
}

fn is_place_label(layer: &Layer) -> bool {
    layer.source_layer() == Some("place")
}

fn is_building(layer: &Layer) -> bool {
    layer.source_layer() == Some("building")
}

fn is_boundary(layer: &Layer) -> bool {
    layer.source_layer() == Some("boundary")
}

/// Classify a layer. Total: every layer gets exactly one category.
pub fn classify(layer: &Layer) -> Category {
    let kind = RULES
        .iter()
        .find(|rule| rule.matches(layer))
        .map_or(CategoryKind::Unclassified, |rule| rule.kind);
    Category::refine(kind, layer)
}
