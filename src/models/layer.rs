//! Layer model
//!
//! A layer is kept as its original JSON object so that every key the tool does
//! not touch (`filter`, `source`, `maxzoom`, `metadata`, ...) survives in its
//! original position.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Geometry/render type of a layer (`type` key)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LayerType {
    Background,
    Fill,
    Line,
    Symbol,
    Raster,
    Circle,
    FillExtrusion,
    Heatmap,
    Hillshade,
    /// Any type this crate has no name for, including a missing `type`
    Other(String),
}

impl LayerType {
    pub fn as_str(&self) -> &str {
        match self {
            LayerType::Background => "background",
            LayerType::Fill => "fill",
            LayerType::Line => "line",
            LayerType::Symbol => "symbol",
            LayerType::Raster => "raster",
            LayerType::Circle => "circle",
            LayerType::FillExtrusion => "fill-extrusion",
            LayerType::Heatmap => "heatmap",
            LayerType::Hillshade => "hillshade",
            LayerType::Other(s) => s,
        }
    }
}

impl From<&str> for LayerType {
    fn from(s: &str) -> Self {
        match s {
            "background" => LayerType::Background,
            "fill" => LayerType::Fill,
            "line" => LayerType::Line,
            "symbol" => LayerType::Symbol,
            "raster" => LayerType::Raster,
            "circle" => LayerType::Circle,
            "fill-extrusion" => LayerType::FillExtrusion,
            "heatmap" => LayerType::Heatmap,
            "hillshade" => LayerType::Hillshade,
            other => LayerType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Property container of a layer that overrides are written into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyContainer {
    Paint,
    Layout,
}

impl PropertyContainer {
    pub fn key(self) -> &'static str {
        match self {
            PropertyContainer::Paint => "paint",
            PropertyContainer::Layout => "layout",
        }
    }
}

/// One visual rule of a style document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layer {
    fields: Map<String, Value>,
}

impl Layer {
    /// Build a layer with just an `id` and a `type`
    pub fn new(id: impl Into<String>, layer_type: LayerType) -> Self {
        let mut fields = Map::new();
        fields.insert("id".to_string(), Value::String(id.into()));
        fields.insert(
            "type".to_string(),
            Value::String(layer_type.as_str().to_string()),
        );
        Self { fields }
    }

    /// Set `source-layer`, consuming and returning the layer
    pub fn with_source_layer(mut self, source_layer: impl Into<String>) -> Self {
        self.fields.insert(
            "source-layer".to_string(),
            Value::String(source_layer.into()),
        );
        self
    }

    /// Set the `paint` mapping, consuming and returning the layer
    pub fn with_paint(mut self, paint: Map<String, Value>) -> Self {
        self.fields
            .insert(PropertyContainer::Paint.key().to_string(), Value::Object(paint));
        self
    }

    /// Set the `layout` mapping, consuming and returning the layer
    pub fn with_layout(mut self, layout: Map<String, Value>) -> Self {
        self.fields
            .insert(PropertyContainer::Layout.key().to_string(), Value::Object(layout));
        self
    }

    /// Layer identifier. A missing or non-string `id` reads as the empty string.
    pub fn id(&self) -> &str {
        self.str_field("id").unwrap_or_default()
    }

    pub fn layer_type(&self) -> LayerType {
        LayerType::from(self.str_field("type").unwrap_or_default())
    }

    pub fn source_layer(&self) -> Option<&str> {
        self.str_field("source-layer")
    }

    pub fn paint(&self) -> Option<&Map<String, Value>> {
        self.container(PropertyContainer::Paint)
    }

    pub fn layout(&self) -> Option<&Map<String, Value>> {
        self.container(PropertyContainer::Layout)
    }

    /// The container mapping, if present and an object
    pub fn container(&self, container: PropertyContainer) -> Option<&Map<String, Value>> {
        self.fields.get(container.key()).and_then(Value::as_object)
    }

    pub fn minzoom(&self) -> Option<f64> {
        self.fields.get("minzoom").and_then(Value::as_f64)
    }

    pub fn set_minzoom(&mut self, zoom: u32) {
        self.fields.insert("minzoom".to_string(), Value::from(zoom));
    }

    /// Whether the paint mapping carries `key`
    pub fn has_paint_property(&self, key: &str) -> bool {
        self.paint().is_some_and(|paint| paint.contains_key(key))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }

    pub(crate) fn fields_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.fields
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for Layer {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors_read_original_fields() {
        let layer: Layer = serde_json::from_value(json!({
            "id": "road_major",
            "type": "line",
            "source-layer": "transportation",
            "minzoom": 6,
            "paint": {"line-color": "#fff"}
        }))
        .unwrap();

        assert_eq!(layer.id(), "road_major");
        assert_eq!(layer.layer_type(), LayerType::Line);
        assert_eq!(layer.source_layer(), Some("transportation"));
        assert_eq!(layer.minzoom(), Some(6.0));
        assert!(layer.has_paint_property("line-color"));
        assert!(layer.layout().is_none());
    }

    #[test]
    fn test_missing_fields_are_tolerated() {
        let layer: Layer = serde_json::from_value(json!({"paint": "not-an-object"})).unwrap();

        assert_eq!(layer.id(), "");
        assert_eq!(layer.layer_type(), LayerType::Other(String::new()));
        assert!(layer.paint().is_none());
        assert!(!layer.has_paint_property("fill-color"));
    }

    #[test]
    fn test_builder_methods() {
        let paint = json!({"line-color": "#fea"}).as_object().cloned().unwrap();
        let layout = json!({"line-cap": "round"}).as_object().cloned().unwrap();
        let layer = Layer::new("highway-primary", LayerType::Line)
            .with_source_layer("transportation")
            .with_layout(layout)
            .with_paint(paint);

        assert_eq!(layer.source_layer(), Some("transportation"));
        assert!(layer.has_paint_property("line-color"));
        assert_eq!(
            layer.layout().and_then(|layout| layout.get("line-cap")),
            Some(&json!("round"))
        );
        let keys: Vec<&str> = layer.as_map().keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "type", "source-layer", "layout", "paint"]);
    }

    #[test]
    fn test_key_order_survives_serialization() {
        let input = r#"{"type":"fill","id":"a","filter":["==","class","x"],"source":"openmaptiles"}"#;
        let layer: Layer = serde_json::from_str(input).unwrap();
        assert_eq!(serde_json::to_string(&layer).unwrap(), input);
    }

    #[test]
    fn test_layer_type_round_trip_names() {
        assert_eq!(LayerType::from("fill-extrusion"), LayerType::FillExtrusion);
        assert_eq!(LayerType::FillExtrusion.to_string(), "fill-extrusion");
        assert_eq!(LayerType::from("sky").as_str(), "sky");
    }
}
