//! Normalization of raw field values into a tagged form the evaluator dispatches on.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A latitude/longitude pair as stored by location fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// The result of looking up and normalizing one field of a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Parses as a finite number. `text` keeps the original spelling for string operators.
    Numeric { value: f64, text: String },
    Text(String),
    Geo(GeoPoint),
    /// Absent, null, or a shape no operator applies to.
    Missing,
}

impl FieldValue {
    /// Looks up `field` in `values` and normalizes it.
    #[must_use]
    pub fn lookup(values: &Map<String, Value>, field: &str) -> Self {
        values.get(field).map_or(Self::Missing, Self::from_json)
    }

    #[must_use]
    pub fn from_json(v: &Value) -> Self {
        match v {
            Value::Null => Self::Missing,
            Value::Bool(b) => Self::Text(b.to_string()),
            Value::Number(n) => match n.as_f64() {
                Some(f) if f.is_finite() => Self::Numeric { value: f, text: n.to_string() },
                _ => Self::Text(n.to_string()),
            },
            Value::String(s) => Self::from_text(s),
            Value::Object(m) => geo_point(m).map_or(Self::Missing, Self::Geo),
            Value::Array(_) => Self::Missing,
        }
    }

    #[must_use]
    pub fn from_text(s: &str) -> Self {
        match parse_number(s) {
            Some(value) => Self::Numeric { value, text: s.to_string() },
            None => Self::Text(s.to_string()),
        }
    }

    /// Text form used by the string operator table.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Numeric { text, .. } => Some(text),
            Self::Text(s) => Some(s),
            Self::Geo(_) | Self::Missing => None,
        }
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Numeric { value, .. } => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Parses decimal text as a finite `f64`. Surrounding whitespace is ignored;
/// empty text and `NaN`/`inf` spellings are not numbers.
#[must_use]
pub fn parse_number(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok().filter(|f| f.is_finite())
}

fn geo_point(m: &Map<String, Value>) -> Option<GeoPoint> {
    let latitude = m.get("latitude").and_then(Value::as_f64)?;
    let longitude = m.get("longitude").and_then(Value::as_f64)?;
    Some(GeoPoint { latitude, longitude })
}
