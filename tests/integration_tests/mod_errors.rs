use formfilter::errors::FilterError;
use std::io;

#[test]
fn test_io_error_display() {
    let err = FilterError::from(io::Error::new(io::ErrorKind::NotFound, "file not found"));
    assert_eq!(format!("{err}"), "I/O error: file not found");
}

#[test]
fn test_no_such_form_display() {
    let err = FilterError::NoSuchForm("sites".to_string());
    assert_eq!(format!("{err}"), "Form not found: sites");
}

#[test]
fn test_too_many_criteria_display() {
    let err = FilterError::TooManyCriteria { count: 70, max: 64 };
    assert_eq!(format!("{err}"), "too many criteria: 70 (max 64)");
}

#[test]
fn test_record_error_display() {
    let err = FilterError::Record { line: 4, message: "expected a JSON object".into() };
    assert_eq!(format!("{err}"), "record 4: expected a JSON object");
}

#[test]
fn test_json_error_converts() {
    let err: FilterError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
    assert!(matches!(err, FilterError::Json(_)));
}
