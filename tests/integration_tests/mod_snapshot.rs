use formfilter::query::{Criterion, Logic, Operator};
use formfilter::{FilterError, MemorySource, Record, RecordId, Snapshot};
use serde_json::json;

fn source() -> MemorySource {
    MemorySource::new().with_form(
        "sites",
        vec![
            Record::from_value(1, json!({"name": "Depot", "visits": 3})),
            Record::from_value(2, json!({"name": "Yard", "visits": 12})),
            Record::from_value(3, json!({"name": "Dock"})),
        ],
    )
}

fn id_strs(ids: Vec<&RecordId>) -> Vec<&str> {
    ids.into_iter().map(RecordId::as_str).collect()
}

#[test]
fn load_then_filter_repeatedly() {
    let snap = Snapshot::load(&source(), "sites").unwrap();
    assert_eq!(snap.form(), "sites");
    assert_eq!(snap.len(), 3);

    let busy = snap.view(&[Criterion::new("visits", Operator::Greater, "5")], Logic::And);
    assert_eq!(id_strs(busy.ids()), vec!["2"]);

    // A new filter sees the whole snapshot again, not the previous view
    let d = busy.refilter(&[Criterion::new("name", Operator::StartsWith, "d")], Logic::And);
    assert_eq!(id_strs(d.ids()), vec!["1", "3"]);

    let cleared = d.refilter(&[], Logic::Or);
    assert_eq!(cleared.len(), 3);
    assert_eq!(cleared.to_vec(), snap.records().to_vec());
}

#[test]
fn unknown_form_is_reported() {
    let err = Snapshot::load(&source(), "missing").unwrap_err();
    assert!(matches!(err, FilterError::NoSuchForm(ref f) if f == "missing"));
}

#[test]
fn view_remembers_its_criteria() {
    let snap = Snapshot::load(&source(), "sites").unwrap();
    let c = vec![Criterion::new("name", Operator::Contains, "o")];
    let v = snap.view(&c, Logic::Or);
    assert_eq!(v.criteria(), c.as_slice());
    assert_eq!(v.logic(), Logic::Or);
    assert!(!v.is_empty());
}
