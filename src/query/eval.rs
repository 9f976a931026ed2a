use serde_json::{Map, Value};
use std::time::Instant;

use super::telemetry;
use super::types::{Criterion, Logic, Operator};
use super::value::{FieldValue, parse_number};
use crate::record::Record;

/// A criterion with its comparison value normalized once, ahead of the record scan.
#[derive(Debug, Clone)]
struct CompiledCriterion {
    field: String,
    op: Operator,
    number: Option<f64>,
    lowered: String,
}

impl CompiledCriterion {
    fn new(c: &Criterion) -> Self {
        Self {
            field: c.field.clone(),
            op: c.operator,
            number: parse_number(&c.value),
            lowered: c.value.to_lowercase(),
        }
    }

    fn eval(&self, values: &Map<String, Value>) -> bool {
        let field = FieldValue::lookup(values, &self.field);
        match (&field, self.number) {
            (FieldValue::Missing | FieldValue::Geo(_), _) => false,
            (FieldValue::Numeric { value, .. }, Some(target)) => {
                compare_numbers(self.op, *value, target)
            }
            _ => field
                .as_text()
                .is_some_and(|t| compare_text(self.op, &t.to_lowercase(), &self.lowered)),
        }
    }
}

/// A criteria list and combinator prepared for repeated evaluation.
#[derive(Debug, Clone)]
pub struct CompiledFilter {
    criteria: Vec<CompiledCriterion>,
    logic: Logic,
}

impl CompiledFilter {
    #[must_use]
    pub fn new(criteria: &[Criterion], logic: Logic) -> Self {
        Self { criteria: criteria.iter().map(CompiledCriterion::new).collect(), logic }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    #[must_use]
    pub const fn logic(&self) -> Logic {
        self.logic
    }

    /// Whether a record is kept. An empty criteria list keeps everything.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        if self.criteria.is_empty() {
            return true;
        }
        match self.logic {
            Logic::And => self.criteria.iter().all(|c| c.eval(&record.values)),
            Logic::Or => self.criteria.iter().any(|c| c.eval(&record.values)),
        }
    }

    /// Positions of the kept records, in input order.
    #[must_use]
    pub fn apply_indices(&self, records: &[Record]) -> Vec<usize> {
        if self.criteria.is_empty() {
            return (0..records.len()).collect();
        }
        let start = Instant::now();
        let kept: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| self.matches(r))
            .map(|(i, _)| i)
            .collect();
        telemetry::record_apply(
            self.criteria.len(),
            self.logic,
            records.len(),
            kept.len(),
            start.elapsed(),
        );
        kept
    }

    /// The kept records, borrowed from `records` in input order.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        self.apply_indices(records).into_iter().map(|i| &records[i]).collect()
    }
}

/// Filters `records` by `criteria` combined with `logic`.
///
/// Never fails: a criterion that cannot be evaluated for a record (missing
/// field, null, unsupported value shape, operator outside the applicable
/// table) is simply not satisfied. An empty criteria list returns every record.
#[must_use]
pub fn apply<'a>(records: &'a [Record], criteria: &[Criterion], logic: Logic) -> Vec<&'a Record> {
    if criteria.is_empty() {
        return records.iter().collect();
    }
    let out = CompiledFilter::new(criteria, logic).apply(records);
    log::debug!(
        "filter applied: criteria={} logic={} scanned={} matched={}",
        criteria.len(),
        logic,
        records.len(),
        out.len()
    );
    out
}

/// Whether a single record satisfies `criteria` under `logic`.
#[must_use]
pub fn matches(record: &Record, criteria: &[Criterion], logic: Logic) -> bool {
    CompiledFilter::new(criteria, logic).matches(record)
}

/// Evaluates one criterion against a record's values.
#[must_use]
pub fn eval_criterion(values: &Map<String, Value>, criterion: &Criterion) -> bool {
    CompiledCriterion::new(criterion).eval(values)
}

#[allow(clippy::float_cmp)]
fn compare_numbers(op: Operator, a: f64, b: f64) -> bool {
    match op {
        Operator::Equals => a == b,
        Operator::Greater => a > b,
        Operator::Less => a < b,
        Operator::GreaterOrEqual => a >= b,
        Operator::LessOrEqual => a <= b,
        Operator::Contains | Operator::StartsWith => false,
    }
}

fn compare_text(op: Operator, haystack: &str, needle: &str) -> bool {
    match op {
        Operator::Equals => haystack == needle,
        Operator::Contains => haystack.contains(needle),
        Operator::StartsWith => haystack.starts_with(needle),
        Operator::Greater | Operator::Less | Operator::GreaterOrEqual | Operator::LessOrEqual => {
            false
        }
    }
}
