use crate::config::OutputMode;
use crate::errors::FilterError;
use crate::query::{FilterSpec, discover_schema_from};
use crate::snapshot::{FilterView, Snapshot};
use crate::source::RecordSource;
use std::io::Write;

use super::command::Command;

fn load_view<S: RecordSource + ?Sized>(
    source: &S,
    form: &str,
    spec: &FilterSpec,
) -> Result<FilterView, FilterError> {
    let snapshot = Snapshot::load(source, form)?;
    let view = snapshot.view_spec(spec);
    log::info!(
        "form={form} criteria={} logic={} matched={}/{}",
        spec.criteria.len(),
        spec.logic,
        view.len(),
        snapshot.len()
    );
    Ok(view)
}

fn write_view<W: Write>(
    view: &FilterView,
    mode: OutputMode,
    out: &mut W,
) -> Result<(), FilterError> {
    match mode {
        OutputMode::Ndjson => {
            for r in view.records() {
                serde_json::to_writer(&mut *out, r)?;
                writeln!(out)?;
            }
        }
        OutputMode::Json => {
            let all: Vec<_> = view.records().collect();
            serde_json::to_writer_pretty(&mut *out, &all)?;
            writeln!(out)?;
        }
        OutputMode::Ids => {
            for id in view.ids() {
                writeln!(out, "{id}")?;
            }
        }
    }
    Ok(())
}

/// Runs `cmd` against `source`, writing results to `out`.
///
/// # Errors
/// Returns an error if the source fails or output cannot be written.
pub fn run<S: RecordSource + ?Sized, W: Write>(
    source: &S,
    cmd: Command,
    out: &mut W,
) -> Result<(), FilterError> {
    match cmd {
        Command::Filter { form, spec, output } => {
            let view = load_view(source, &form, &spec)?;
            write_view(&view, output, out)
        }
        Command::Count { form, spec } => {
            let view = load_view(source, &form, &spec)?;
            writeln!(out, "{}", view.len())?;
            Ok(())
        }
        Command::Schema { form } => {
            let records = source.fetch(&form)?;
            for f in discover_schema_from(&records) {
                let line = serde_json::json!({
                    "name": f.name,
                    "kind": f.kind,
                    "operators": f.kind.operators(),
                });
                writeln!(out, "{line}")?;
            }
            Ok(())
        }
        Command::Forms => {
            for name in source.forms()? {
                writeln!(out, "{name}")?;
            }
            Ok(())
        }
    }
}
