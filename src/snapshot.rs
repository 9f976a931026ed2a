use crate::errors::FilterError;
use crate::query::{CompiledFilter, Criterion, FilterSpec, Logic};
use crate::record::Record;
use crate::source::RecordSource;
use crate::types::{FormName, RecordId};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// The unfiltered records of one form, fetched once and never modified.
#[derive(Debug, Clone)]
pub struct Snapshot {
    form: FormName,
    records: Arc<[Record]>,
    fetched_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(form: impl Into<FormName>, records: Vec<Record>) -> Self {
        Self { form: form.into(), records: records.into(), fetched_at: Utc::now() }
    }

    /// Fetches the form's records from `source`.
    ///
    /// # Errors
    /// Propagates the source's error; nothing is filtered on failure.
    pub fn load<S: RecordSource + ?Sized>(source: &S, form: &str) -> Result<Self, FilterError> {
        let records = source.fetch(form)?;
        log::info!("snapshot of form {form}: {} records", records.len());
        Ok(Self::new(form, records))
    }

    #[must_use]
    pub fn form(&self) -> &str {
        &self.form
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub const fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Filters the snapshot. The returned view shares the snapshot's records.
    #[must_use]
    pub fn view(&self, criteria: &[Criterion], logic: Logic) -> FilterView {
        let indices = CompiledFilter::new(criteria, logic).apply_indices(&self.records);
        FilterView {
            snapshot: self.clone(),
            spec: FilterSpec::new(criteria.to_vec(), logic),
            indices,
        }
    }

    #[must_use]
    pub fn view_spec(&self, spec: &FilterSpec) -> FilterView {
        self.view(&spec.criteria, spec.logic)
    }

    /// A view with no criteria: every record.
    #[must_use]
    pub fn unfiltered(&self) -> FilterView {
        self.view(&[], Logic::default())
    }
}

/// The caller-held "current view" over a snapshot.
#[derive(Debug, Clone)]
pub struct FilterView {
    snapshot: Snapshot,
    spec: FilterSpec,
    indices: Vec<usize>,
}

impl FilterView {
    /// Filters again from the original snapshot. The current view's output is not
    /// an input, so successive filters do not stack.
    #[must_use]
    pub fn refilter(&self, criteria: &[Criterion], logic: Logic) -> Self {
        self.snapshot.view(criteria, logic)
    }

    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn criteria(&self) -> &[Criterion] {
        &self.spec.criteria
    }

    #[must_use]
    pub const fn logic(&self) -> Logic {
        self.spec.logic
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.indices.iter().map(|&i| &self.snapshot.records[i])
    }

    #[must_use]
    pub fn ids(&self) -> Vec<&RecordId> {
        self.records().map(|r| &r.id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Record> {
        self.records().cloned().collect()
    }
}
