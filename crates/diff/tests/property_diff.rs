use json_shape_diff::{diff, DiffKind};
use json_shape_value::JsonValue;
use proptest::prelude::*;
use serde_json::Value;

/// Arbitrary JSON documents: bounded depth and width, all six kinds.
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1.0e9..1.0e9f64).prop_map(Value::from),
        "[a-z0-9]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,5}", inner, 0..6)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

/// Added and removed swap when the sides swap; other kinds stay.
fn swapped(kind: DiffKind) -> DiffKind {
    match kind {
        DiffKind::Added => DiffKind::Removed,
        DiffKind::Removed => DiffKind::Added,
        other => other,
    }
}

proptest! {
    #[test]
    fn property_self_diff_is_all_unchanged(value in arb_json()) {
        let left = JsonValue::from(value.clone());
        let right = JsonValue::from(value);
        let records = diff(&left, &right).unwrap();
        prop_assert!(records.iter().all(|r| r.kind == DiffKind::Unchanged));
    }

    #[test]
    fn property_diff_is_deterministic(left in arb_json(), right in arb_json()) {
        let left = JsonValue::from(left);
        let right = JsonValue::from(right);
        let first = diff(&left, &right).unwrap();
        let second = diff(&left, &right).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn property_swapping_sides_swaps_added_and_removed(
        left in arb_json(),
        right in arb_json(),
    ) {
        let l = JsonValue::from(left);
        let r = JsonValue::from(right);

        let mut forward: Vec<(String, &str)> = diff(&l, &r)
            .unwrap()
            .into_iter()
            .map(|rec| (rec.path, rec.kind.as_str()))
            .collect();
        let mut backward: Vec<(String, &str)> = diff(&r, &l)
            .unwrap()
            .into_iter()
            .map(|rec| (rec.path, swapped(rec.kind).as_str()))
            .collect();

        forward.sort();
        backward.sort();
        prop_assert_eq!(forward, backward);
    }
}
