mod csv;
mod detect;
mod json;
mod options;

pub use self::csv::load_csv;
pub use detect::{EXTENSIONS, detect_format, format_from_path};
pub use json::{load_json_array, load_ndjson};
pub use options::{CsvOptions, ImportFormat};

use crate::errors::FilterError;
use crate::record::Record;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Reads every record from `reader`. `Auto` sniffs the leading bytes.
/// A leading UTF-8 byte order mark is dropped for every format.
///
/// # Errors
/// Returns an error on I/O failure or the first malformed record.
pub fn load_records<R: Read>(reader: R, format: ImportFormat) -> Result<Vec<Record>, FilterError> {
    let mut reader = BufReader::new(reader);
    skip_bom(&mut reader)?;
    let format = match format {
        ImportFormat::Auto => detect_format(&mut reader)?,
        f => f,
    };
    read_as(reader, format)
}

/// Reads a record file. `Auto` goes by extension first, then by content.
///
/// # Errors
/// Returns an error if the file cannot be opened or parsed.
pub fn load_file(path: &Path, format: ImportFormat) -> Result<Vec<Record>, FilterError> {
    let f = std::fs::File::open(path)
        .map_err(|e| FilterError::Io(format!("{}: {e}", path.display())))?;
    let format = match format {
        ImportFormat::Auto => format_from_path(path).unwrap_or(ImportFormat::Auto),
        f => f,
    };
    let records = load_records(f, format)?;
    log::info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

const BOM: &[u8] = b"\xEF\xBB\xBF";

fn skip_bom<R: BufRead>(reader: &mut R) -> io::Result<()> {
    if reader.fill_buf()?.starts_with(BOM) {
        reader.consume(BOM.len());
    }
    Ok(())
}

fn read_as<R: BufRead>(reader: R, format: ImportFormat) -> Result<Vec<Record>, FilterError> {
    match format {
        ImportFormat::Json => load_json_array(reader),
        ImportFormat::Ndjson => load_ndjson(reader),
        ImportFormat::Csv => load_csv(reader, &CsvOptions::default()),
        ImportFormat::Auto => Err(FilterError::UnsupportedFormat("auto".into())),
    }
}
