//! Style document model

use super::layer::Layer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised when a document does not have the layered style shape
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(String),

    /// Root is not an object
    #[error("Invalid document structure: expected object at root, found {0}")]
    InvalidStructure(String),

    /// `layers` missing or not an array
    #[error("Document has no 'layers' array")]
    MissingLayers,

    /// A `layers` entry is not an object
    #[error("Layer at index {index} is not an object")]
    InvalidLayer { index: usize },
}

impl From<serde_json::Error> for DocumentError {
    fn from(e: serde_json::Error) -> Self {
        DocumentError::Json(e.to_string())
    }
}

const LAYERS_KEY: &str = "layers";
const NAME_KEY: &str = "name";

/// A layered map style document.
///
/// Top-level keys other than `layers` are kept verbatim. The `layers` slot
/// keeps its original position in the object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct StyleDocument {
    fields: Map<String, Value>,
    layers: Vec<Layer>,
}

impl StyleDocument {
    pub fn new(name: impl Into<String>, layers: Vec<Layer>) -> Self {
        let mut fields = Map::new();
        fields.insert(NAME_KEY.to_string(), Value::String(name.into()));
        fields.insert(LAYERS_KEY.to_string(), Value::Null);
        Self { fields, layers }
    }

    /// Parse a document from JSON text
    pub fn from_json_str(content: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// Parse a document from JSON bytes
    pub fn from_slice(content: &[u8]) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_slice(content)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        match value {
            Value::Object(map) => Self::try_from(map),
            other => Err(DocumentError::InvalidStructure(json_kind(&other).to_string())),
        }
    }

    pub fn to_value(&self) -> Value {
        Value::Object(Map::from(self.clone()))
    }

    /// Pretty JSON with two-space indentation
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get(NAME_KEY).and_then(Value::as_str)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.fields
            .insert(NAME_KEY.to_string(), Value::String(name.into()));
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Top-level value other than `layers`
    pub fn get(&self, key: &str) -> Option<&Value> {
        match key {
            LAYERS_KEY => None,
            _ => self.fields.get(key),
        }
    }

    /// A document with the same top-level fields and a new layer sequence
    pub fn with_layers(&self, layers: Vec<Layer>) -> Self {
        Self {
            fields: self.fields.clone(),
            layers,
        }
    }
}

impl TryFrom<Map<String, Value>> for StyleDocument {
    type Error = DocumentError;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let entries = match fields.get_mut(LAYERS_KEY).map(Value::take) {
            Some(Value::Array(entries)) => entries,
            _ => return Err(DocumentError::MissingLayers),
        };

        let layers = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                Value::Object(map) => Ok(Layer::from(map)),
                _ => Err(DocumentError::InvalidLayer { index }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { fields, layers })
    }
}

impl From<StyleDocument> for Map<String, Value> {
    fn from(document: StyleDocument) -> Self {
        let StyleDocument { mut fields, layers } = document;
        let layers = layers
            .into_iter()
            .map(|layer| Value::Object(layer.into_map()))
            .collect();
        fields.insert(LAYERS_KEY.to_string(), Value::Array(layers));
        fields
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
