use formfilter::query::telemetry::{self, snapshot};
use formfilter::{Criterion, Logic, Operator, Record, apply};
use serde_json::json;

#[test]
fn zero_threshold_marks_every_filter_slow() {
    let records = vec![
        Record::from_value(1, json!({"city": "Perth"})),
        Record::from_value(2, json!({"city": "Darwin"})),
    ];
    telemetry::set_slow_filter_ms(0);
    let before = snapshot();
    let out = apply(&records, &[Criterion::new("city", Operator::Equals, "perth")], Logic::And);
    let after = snapshot();
    telemetry::set_slow_filter_ms(250);
    assert_eq!(out.len(), 1);
    assert!(after.filters_slow_total > before.filters_slow_total);
    assert!(after.filters_total > before.filters_total);
    assert!(after.records_scanned_total >= before.records_scanned_total + 2);
}
