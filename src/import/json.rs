use crate::errors::FilterError;
use crate::record::Record;
use crate::types::RecordId;
use serde_json::Value;
use std::io::{BufRead, Read};

/// Turns one JSON item into a record.
///
/// `{"id": .., "values": {..}}` with no other keys keeps its id and values.
/// Any other object is taken as the values themselves, with the id read from
/// an `id` key when present and `position` (1-based) otherwise.
pub(crate) fn record_from_item(item: Value, position: usize) -> Result<Record, FilterError> {
    let Value::Object(mut map) = item else {
        return Err(FilterError::Record {
            line: position,
            message: "expected a JSON object".into(),
        });
    };
    let wrapped = matches!(map.get("values"), Some(Value::Object(_)))
        && map.keys().all(|k| k == "id" || k == "values");
    if wrapped {
        let id = match map.remove("id") {
            Some(v) => id_from_value(v, position)?,
            None => RecordId::from(position),
        };
        let values = match map.remove("values") {
            Some(Value::Object(m)) => m,
            _ => serde_json::Map::new(),
        };
        return Ok(Record::new(id, values));
    }
    let id = match map.get("id") {
        Some(v) => id_from_value(v.clone(), position)?,
        None => RecordId::from(position),
    };
    Ok(Record::new(id, map))
}

fn id_from_value(v: Value, position: usize) -> Result<RecordId, FilterError> {
    serde_json::from_value(v).map_err(|e| FilterError::Record {
        line: position,
        message: format!("invalid id: {e}"),
    })
}

pub fn load_json_array<R: Read>(reader: R) -> Result<Vec<Record>, FilterError> {
    let val: Value = serde_json::from_reader(reader)?;
    let Value::Array(items) = val else {
        return Err(FilterError::Record { line: 1, message: "expected JSON array".into() });
    };
    items.into_iter().enumerate().map(|(i, item)| record_from_item(item, i + 1)).collect()
}

/// One JSON object per line; blank lines are skipped and positions count records, not lines.
pub fn load_ndjson<R: BufRead>(mut reader: R) -> Result<Vec<Record>, FilterError> {
    let mut out = Vec::new();
    let mut line_no: usize = 0;
    let mut buf = String::with_capacity(8 * 1024);
    loop {
        buf.clear();
        let n = reader.read_line(&mut buf)?;
        if n == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_start_matches('\u{feff}').trim();
        if line.is_empty() {
            continue;
        }
        let v: Value = serde_json::from_str(line)
            .map_err(|e| FilterError::Record { line: line_no, message: e.to_string() })?;
        let rec = record_from_item(v, out.len() + 1).map_err(|e| match e {
            FilterError::Record { message, .. } => FilterError::Record { line: line_no, message },
            other => other,
        })?;
        out.push(rec);
    }
    Ok(out)
}
