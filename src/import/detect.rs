//! Format detection heuristics for record files.

use std::io::{self, BufRead};
use std::path::Path;

use super::ImportFormat;

/// Extension that a record file of the given format is expected to carry.
pub const EXTENSIONS: &[(&str, ImportFormat)] = &[
    ("json", ImportFormat::Json),
    ("ndjson", ImportFormat::Ndjson),
    ("jsonl", ImportFormat::Ndjson),
    ("csv", ImportFormat::Csv),
];

#[must_use]
pub fn format_from_path(path: &Path) -> Option<ImportFormat> {
    let ext = path.extension().and_then(|s| s.to_str())?.to_ascii_lowercase();
    EXTENSIONS.iter().find(|(e, _)| *e == ext).map(|(_, f)| *f)
}

/// Peeks at the head of `reader` without consuming it.
pub fn detect_format<R: BufRead>(reader: &mut R) -> io::Result<ImportFormat> {
    let buf = reader.fill_buf()?;
    let s = String::from_utf8_lossy(&buf[..buf.len().min(256)]);
    let head = s.trim_start_matches('\u{feff}').trim_start();
    Ok(if head.starts_with('[') {
        ImportFormat::Json
    } else if head.starts_with('{') {
        ImportFormat::Ndjson
    } else {
        ImportFormat::Csv
    })
}
