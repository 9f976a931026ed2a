use formfilter::import::{ImportFormat, load_file, load_records};
use formfilter::source::{DirSource, RecordSource};
use formfilter::FilterError;
use serde_json::json;
use std::io::Cursor;
use std::path::PathBuf;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

#[test]
fn ndjson_fixture_keeps_ids_and_shapes() {
    let rs = load_file(&fixtures().join("listings.ndjson"), ImportFormat::Auto).unwrap();
    assert_eq!(rs.len(), 3);
    assert_eq!(rs[2].id.as_str(), "3");
    assert_eq!(rs[1].get("location"), Some(&json!({"latitude": -33.87, "longitude": 151.21})));
}

#[test]
fn csv_fixture_omits_empty_cells() {
    let rs = load_file(&fixtures().join("inspections.csv"), ImportFormat::Auto).unwrap();
    assert_eq!(rs.len(), 3);
    assert_eq!(rs[0].id.as_str(), "a1");
    assert_eq!(rs[0].get("score"), Some(&json!("88")));
    assert!(rs[2].get("score").is_none());
}

#[test]
fn auto_sniffs_readers() {
    let rs = load_records(Cursor::new("[{\"a\": 1}, {\"a\": 2}]"), ImportFormat::Auto).unwrap();
    assert_eq!(rs[1].id.as_str(), "2");
    let rs = load_records(Cursor::new("a,b\n1,2\n"), ImportFormat::Auto).unwrap();
    assert_eq!(rs[0].get("b"), Some(&json!("2")));
}

#[test]
fn missing_file_is_io_error() {
    let err = load_file(&fixtures().join("nope.ndjson"), ImportFormat::Auto).unwrap_err();
    assert!(matches!(err, FilterError::Io(_)));
}

#[test]
fn dir_source_lists_and_fetches_forms() {
    let src = DirSource::new(fixtures());
    assert_eq!(src.forms().unwrap(), vec!["inspections".to_string(), "listings".to_string()]);
    assert_eq!(src.fetch("listings").unwrap().len(), 3);
    assert!(matches!(src.fetch("other"), Err(FilterError::NoSuchForm(_))));
}

#[test]
fn format_names_parse() {
    assert_eq!("JSONL".parse::<ImportFormat>().unwrap(), ImportFormat::Ndjson);
    assert!(matches!("xml".parse::<ImportFormat>(), Err(FilterError::UnsupportedFormat(_))));
}
