//! Zoom interpolation ("stops") values

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised when building a zoom ramp
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StopsError {
    #[error("zoom ramp has no breakpoints")]
    Empty,

    #[error("zoom breakpoints must be strictly increasing: {previous} is followed by {next}")]
    NotIncreasing { previous: u32, next: u32 },
}

/// Piecewise-linear function from zoom level to a property value.
///
/// Serializes to the legacy style form `{"stops": [[zoom, value], ...]}`.
/// Breakpoint zooms are strictly increasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStops<T>")]
pub struct ZoomStops<T> {
    stops: Vec<(u32, T)>,
}

#[derive(Deserialize)]
struct RawStops<T> {
    stops: Vec<(u32, T)>,
}

impl<T> TryFrom<RawStops<T>> for ZoomStops<T> {
    type Error = StopsError;

    fn try_from(raw: RawStops<T>) -> Result<Self, Self::Error> {
        Self::new(raw.stops)
    }
}

impl<T> ZoomStops<T> {
    pub fn new(stops: Vec<(u32, T)>) -> Result<Self, StopsError> {
        if stops.is_empty() {
            return Err(StopsError::Empty);
        }
        for pair in stops.windows(2) {
            let (previous, next) = (pair[0].0, pair[1].0);
            if next <= previous {
                return Err(StopsError::NotIncreasing { previous, next });
            }
        }
        Ok(Self { stops })
    }

    pub fn stops(&self) -> &[(u32, T)] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

impl<T: Copy + Into<Value>> ZoomStops<T> {
    pub(crate) fn from_breakpoints(stops: &[(u32, T)]) -> Self {
        debug_assert!(stops.windows(2).all(|pair| pair[0].0 < pair[1].0));
        Self {
            stops: stops.to_vec(),
        }
    }

    /// Render as a style property value
    pub fn to_value(&self) -> Value {
        let breakpoints = self
            .stops
            .iter()
            .map(|&(zoom, value)| Value::Array(vec![Value::from(zoom), value.into()]))
            .collect();
        let mut map = Map::new();
        map.insert("stops".to_string(), Value::Array(breakpoints));
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejects_non_increasing_zooms() {
        let err = ZoomStops::new(vec![(5, 1.0), (5, 2.0)]).unwrap_err();
        assert_eq!(
            err,
            StopsError::NotIncreasing {
                previous: 5,
                next: 5
            }
        );

        assert!(ZoomStops::<f64>::new(vec![]).is_err());
        assert!(ZoomStops::new(vec![(10, 1.0), (7, 2.0)]).is_err());
    }

    #[test]
    fn test_to_value_keeps_integer_and_float_numbers() {
        let widths = ZoomStops::new(vec![(5, 1.0), (10, 2.0), (14, 3.5)]).unwrap();
        assert_eq!(
            widths.to_value(),
            json!({"stops": [[5, 1.0], [10, 2.0], [14, 3.5]]})
        );
        assert_eq!(
            serde_json::to_string(&widths.to_value()).unwrap(),
            r#"{"stops":[[5,1.0],[10,2.0],[14,3.5]]}"#
        );

        let sizes = ZoomStops::new(vec![(10u32, 10u32), (13, 13)]).unwrap();
        assert_eq!(
            serde_json::to_string(&sizes.to_value()).unwrap(),
            r#"{"stops":[[10,10],[13,13]]}"#
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: ZoomStops<f64> =
            serde_json::from_value(json!({"stops": [[7, 0.6], [10, 1.4]]})).unwrap();
        assert_eq!(ok.len(), 2);

        let bad = serde_json::from_value::<ZoomStops<f64>>(json!({"stops": [[10, 0.6], [7, 1.4]]}));
        assert!(bad.is_err());
    }
}
