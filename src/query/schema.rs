//! Field discovery for building a criteria editor from sample data.

use serde::Serialize;

use super::types::Operator;
use super::value::FieldValue;
use crate::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Numeric,
    Text,
    Geo,
}

impl FieldKind {
    /// Operators worth offering for a field of this kind.
    #[must_use]
    pub fn operators(self) -> Vec<Operator> {
        match self {
            Self::Numeric => Operator::ALL.into_iter().filter(|op| op.is_numeric()).collect(),
            Self::Text => Operator::ALL.into_iter().filter(|op| op.is_textual()).collect(),
            Self::Geo => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSchema {
    pub name: String,
    pub kind: FieldKind,
}

/// Guesses field names and kinds from one sample record, sorted by name.
/// Null and unsupported values are skipped.
#[must_use]
pub fn discover_schema(sample: &Record) -> Vec<FieldSchema> {
    let mut out: Vec<FieldSchema> = sample
        .values
        .iter()
        .filter_map(|(name, v)| {
            let kind = match FieldValue::from_json(v) {
                FieldValue::Numeric { .. } => FieldKind::Numeric,
                FieldValue::Text(_) => FieldKind::Text,
                FieldValue::Geo(_) => FieldKind::Geo,
                FieldValue::Missing => return None,
            };
            Some(FieldSchema { name: name.clone(), kind })
        })
        .collect();
    out.sort_by(|a, b| a.name.cmp(&b.name));
    out
}

/// Schema of the first record, or empty when there are no records.
#[must_use]
pub fn discover_schema_from(records: &[Record]) -> Vec<FieldSchema> {
    records.first().map(discover_schema).unwrap_or_default()
}
