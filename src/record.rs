use crate::types::RecordId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A schemaless form record: an id and its field values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Record {
    pub id: RecordId,
    #[serde(default)]
    pub values: Map<String, Value>,
}

impl Record {
    pub fn new(id: impl Into<RecordId>, values: Map<String, Value>) -> Self {
        Self { id: id.into(), values }
    }

    /// Builds a record from a JSON object. Non-object values yield an empty field set.
    pub fn from_value(id: impl Into<RecordId>, value: Value) -> Self {
        let values = match value {
            Value::Object(m) => m,
            _ => Map::new(),
        };
        Self::new(id, values)
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }
}
