use formfilter::query::{Criterion, Operator, parse_criteria_json};
use proptest::prelude::*;

proptest! {
    #![proptest_config(proptest::test_runner::Config {
        failure_persistence: Some(Box::new(
            proptest::test_runner::FileFailurePersistence::WithSource("proptest-regressions"),
        )),
        cases: 64,
        .. proptest::test_runner::Config::default()
    })]

    // Text form keeps everything after the second colon verbatim
    #[test]
    fn prop_text_form_value_is_verbatim(
        field in "[a-z][a-z0-9_]{0,15}",
        op in proptest::sample::select(Operator::ALL.to_vec()),
        value in "[ -~]{0,24}",
    ) {
        let c: Criterion = format!("{field}:{op}:{value}").parse().unwrap();
        prop_assert_eq!(c, Criterion::new(field, op, value));
    }

    #[test]
    fn prop_json_number_values_keep_text(n in -1_000_000i64..1_000_000) {
        let json = format!(r#"[{{"field":"x","operator":"equals","value":{n}}}]"#);
        let spec = parse_criteria_json(&json).unwrap();
        prop_assert_eq!(spec.criteria[0].value.clone(), n.to_string());
    }

    #[test]
    fn prop_serialized_spec_parses_back(
        field in "[a-z]{1,8}",
        op in proptest::sample::select(Operator::ALL.to_vec()),
        value in "[a-zA-Z0-9 ]{0,12}",
    ) {
        let spec = formfilter::FilterSpec::new(
            vec![Criterion::new(field, op, value)],
            formfilter::Logic::Or,
        );
        let json = serde_json::to_string(&spec).unwrap();
        prop_assert_eq!(parse_criteria_json(&json).unwrap(), spec);
    }
}
