use formfilter::cli::{Command, build_spec, run};
use formfilter::config::OutputMode;
use formfilter::query::Logic;
use formfilter::{DirSource, FilterError};
use std::path::PathBuf;

fn source() -> DirSource {
    DirSource::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures"))
}

fn run_to_string(cmd: Command) -> Result<String, FilterError> {
    let mut out = Vec::new();
    run(&source(), cmd, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn filter_prints_ids() {
    let spec = build_spec(&["price:lessOrEqual:75".to_string()], None, None, Logic::And).unwrap();
    let out = run_to_string(Command::Filter {
        form: "listings".into(),
        spec,
        output: OutputMode::Ids,
    })
    .unwrap();
    assert_eq!(out, "2\n3\n");
}

#[test]
fn filter_prints_ndjson_records() {
    let spec = build_spec(&["site:startswith:NORTH".to_string()], None, None, Logic::And).unwrap();
    let out = run_to_string(Command::Filter {
        form: "inspections".into(),
        spec,
        output: OutputMode::Ndjson,
    })
    .unwrap();
    let lines: Vec<serde_json::Value> =
        out.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["id"], "a1");
    assert_eq!(lines[1]["values"]["site"], "north annex");
}

#[test]
fn filter_prints_json_array() {
    let spec = build_spec(&[], None, None, Logic::And).unwrap();
    let out = run_to_string(Command::Filter {
        form: "listings".into(),
        spec,
        output: OutputMode::Json,
    })
    .unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v.as_array().map(Vec::len), Some(3));
}

#[test]
fn count_with_or_logic() {
    let spec = build_spec(
        &["passed:equals:TRUE".to_string(), "score:less:50".to_string()],
        None,
        Some(Logic::Or),
        Logic::And,
    )
    .unwrap();
    let out = run_to_string(Command::Count { form: "inspections".into(), spec }).unwrap();
    assert_eq!(out.trim(), "3");
}

#[test]
fn schema_lists_kinds_and_operators() {
    let out = run_to_string(Command::Schema { form: "listings".into() }).unwrap();
    let rows: Vec<serde_json::Value> =
        out.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    let price = rows.iter().find(|r| r["name"] == "price").unwrap();
    assert_eq!(price["kind"], "numeric");
    assert_eq!(price["operators"].as_array().map(Vec::len), Some(5));
    let city = rows.iter().find(|r| r["name"] == "city").unwrap();
    assert_eq!(city["operators"][2], "startswith");
}

#[test]
fn forms_and_unknown_form() {
    let out = run_to_string(Command::Forms).unwrap();
    assert_eq!(out, "inspections\nlistings\n");
    let err = run_to_string(Command::Schema { form: "nope".into() }).unwrap_err();
    assert!(matches!(err, FilterError::NoSuchForm(_)));
}
