//! Client-side record filtering for form data.
//!
//! Records are fetched once per form into an immutable [`Snapshot`]; every
//! change of criteria produces a fresh [`FilterView`] computed from that
//! snapshot. The evaluator in [`query`] is pure and never fails: criteria that
//! cannot be evaluated for a record are simply not satisfied.

pub mod cli;
pub mod config;
pub mod errors;
pub mod import;
pub mod logger;
pub mod query;
pub mod record;
pub mod snapshot;
pub mod source;
pub mod types;

pub use errors::FilterError;
pub use query::{Criterion, FilterSpec, Logic, Operator, apply};
pub use record::Record;
pub use snapshot::{FilterView, Snapshot};
pub use source::{DirSource, MemorySource, RecordSource};
pub use types::RecordId;
