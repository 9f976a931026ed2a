use crate::errors::FilterError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

use super::types::{Criterion, FilterSpec, Logic, MAX_CRITERIA, MAX_FIELD_LEN, Operator};

impl FromStr for Operator {
    type Err = FilterError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if let Some(op) = Self::ALL.iter().find(|op| op.as_str().eq_ignore_ascii_case(t)) {
            return Ok(*op);
        }
        Ok(match t {
            "=" | "==" | "eq" => Self::Equals,
            ">" | "gt" => Self::Greater,
            "<" | "lt" => Self::Less,
            ">=" | "gte" => Self::GreaterOrEqual,
            "<=" | "lte" => Self::LessOrEqual,
            _ => return Err(FilterError::UnknownOperator(t.to_string())),
        })
    }
}

impl FromStr for Logic {
    type Err = FilterError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" | "ALL" => Ok(Self::And),
            "OR" | "ANY" => Ok(Self::Or),
            _ => Err(FilterError::UnknownLogic(s.trim().to_string())),
        }
    }
}

/// Parses `field:operator:value`. The value is everything after the second colon.
impl FromStr for Criterion {
    type Err = FilterError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let (Some(field), Some(op), Some(value)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(FilterError::InvalidCriterion(format!(
                "expected field:operator:value, got {s:?}"
            )));
        };
        let c = Self::new(field.trim(), op.parse()?, value);
        validate_criterion(&c)?;
        Ok(c)
    }
}

/// Accepts a JSON string, number or boolean and keeps its text form.
pub(crate) fn value_as_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "criterion value must be a string, number or boolean, got {other}"
        ))),
    }
}

/// # Errors
/// Returns an error if a field name is empty or too long.
pub fn validate_criterion(c: &Criterion) -> Result<(), FilterError> {
    if c.field.is_empty() {
        return Err(FilterError::InvalidCriterion("empty field name".into()));
    }
    if c.field.len() > MAX_FIELD_LEN {
        return Err(FilterError::InvalidCriterion(format!(
            "field name longer than {MAX_FIELD_LEN} bytes"
        )));
    }
    Ok(())
}

/// # Errors
/// Returns an error if the spec has too many criteria or an invalid one.
pub fn validate_spec(spec: &FilterSpec) -> Result<(), FilterError> {
    if spec.criteria.len() > MAX_CRITERIA {
        return Err(FilterError::TooManyCriteria { count: spec.criteria.len(), max: MAX_CRITERIA });
    }
    spec.criteria.iter().try_for_each(validate_criterion)
}

/// Parses either `{"logic": "...", "criteria": [...]}` or a bare criteria array (AND).
///
/// # Errors
/// Returns an error if the JSON is malformed or fails validation.
pub fn parse_criteria_json(json: &str) -> Result<FilterSpec, FilterError> {
    let v: Value = serde_json::from_str(json)?;
    let spec = if v.is_array() {
        FilterSpec::new(serde_json::from_value(v)?, Logic::And)
    } else {
        serde_json::from_value::<FilterSpec>(v)?
    };
    validate_spec(&spec)?;
    Ok(spec)
}
