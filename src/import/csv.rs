use crate::errors::FilterError;
use crate::record::Record;
use crate::types::RecordId;
use serde_json::{Map, Value};
use std::io::Read;

use super::options::CsvOptions;

/// Header row names the fields. Cells are kept as strings, empty cells are omitted
/// so they behave like absent fields. A blank id cell falls back to the row position.
pub fn load_csv<R: Read>(reader: R, opts: &CsvOptions) -> Result<Vec<Record>, FilterError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(opts.delimiter)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
    let mut out = Vec::new();
    for (row_no, rec) in rdr.records().enumerate() {
        let rec =
            rec.map_err(|e| FilterError::Record { line: row_no + 2, message: e.to_string() })?;
        let mut values = Map::new();
        let mut id = None;
        for (i, cell) in rec.iter().enumerate() {
            let key = headers.get(i).cloned().unwrap_or_else(|| format!("field_{i}"));
            if key == opts.id_column {
                let cell = cell.trim();
                if !cell.is_empty() {
                    id = Some(RecordId::from(cell));
                }
                continue;
            }
            if cell.is_empty() {
                continue;
            }
            values.insert(key, Value::String(cell.to_string()));
        }
        out.push(Record::new(id.unwrap_or_else(|| RecordId::from(row_no + 1)), values));
    }
    log::debug!("parsed {} records (csv)", out.len());
    Ok(out)
}
