use crate::errors::FilterError;
use crate::query::{Criterion, FilterSpec, Logic, parse_criteria_json, validate_spec};

/// Combines `--criteria` JSON and repeated `--where field:op:value` into one spec.
///
/// JSON criteria come first. An explicit `logic` overrides the JSON's; otherwise
/// the JSON's logic, then `default_logic`, applies.
///
/// # Errors
/// Returns an error if any criterion fails to parse or the combined spec is invalid.
pub fn build_spec(
    wheres: &[String],
    criteria_json: Option<&str>,
    logic: Option<Logic>,
    default_logic: Logic,
) -> Result<FilterSpec, FilterError> {
    let mut spec = match criteria_json {
        Some(j) => parse_criteria_json(j)?,
        None => FilterSpec::new(Vec::new(), default_logic),
    };
    for w in wheres {
        spec.criteria.push(w.parse::<Criterion>()?);
    }
    if let Some(l) = logic {
        spec.logic = l;
    }
    validate_spec(&spec)?;
    Ok(spec)
}
