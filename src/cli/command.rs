use crate::config::OutputMode;
use crate::query::FilterSpec;

pub enum Command {
    /// Print the records of `form` that match `spec`.
    Filter { form: String, spec: FilterSpec, output: OutputMode },
    /// Print how many records of `form` match `spec`.
    Count { form: String, spec: FilterSpec },
    /// Print the fields discovered from the first record of `form`.
    Schema { form: String },
    /// List the forms the source can supply.
    Forms,
}
