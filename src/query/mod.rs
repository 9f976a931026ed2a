// Telemetry is a submodule of query
pub mod telemetry;

// Submodules for separation of concerns
mod eval;
mod parse;
mod schema;
mod types;
mod value;

// Public API re-exports
pub use eval::{CompiledFilter, apply, eval_criterion, matches};
pub use parse::{parse_criteria_json, validate_criterion, validate_spec};
pub use schema::{FieldKind, FieldSchema, discover_schema, discover_schema_from};
pub use types::{Criterion, FilterSpec, Logic, Operator};
pub use value::{FieldValue, GeoPoint, parse_number};
