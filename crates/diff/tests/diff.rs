use json_shape_diff::{diff, diff_with, DiffKind, DiffOptions, DiffRecord};
use json_shape_value::JsonValue;
use serde_json::json;

fn v(value: serde_json::Value) -> JsonValue {
    JsonValue::from(value)
}

fn d(left: serde_json::Value, right: serde_json::Value) -> Vec<DiffRecord> {
    diff(&v(left), &v(right)).unwrap()
}

#[test]
fn test_added_key() {
    let records = d(json!({"a": 1}), json!({"a": 1, "b": 2}));
    let added: Vec<_> = records.iter().filter(|r| r.kind == DiffKind::Added).collect();
    assert_eq!(added.len(), 1);
    assert_eq!(
        *added[0],
        DiffRecord::added("b".to_string(), v(json!(2)))
    );
}

#[test]
fn test_removed_key() {
    let records = d(json!({"a": 1, "b": 2}), json!({"a": 1}));
    let removed: Vec<_> = records
        .iter()
        .filter(|r| r.kind == DiffKind::Removed)
        .collect();
    assert_eq!(removed.len(), 1);
    assert_eq!(
        *removed[0],
        DiffRecord::removed("b".to_string(), v(json!(2)))
    );
}

#[test]
fn test_identical_input_yields_only_unchanged() {
    let doc = json!({"a": 1, "b": [1, 2], "c": {"d": null}});
    let records = d(doc.clone(), doc);
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r.kind == DiffKind::Unchanged));
    let paths: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, ["a", "b[0]", "b[1]", "c.d"]);
}

#[test]
fn test_array_growth_is_addressed_by_index() {
    let records = d(json!({"items": [1, 2]}), json!({"items": [1, 2, 3]}));
    let added = records
        .iter()
        .find(|r| r.kind == DiffKind::Added)
        .expect("one added record");
    assert_eq!(added.path, "items[2]");
    assert_eq!(added.right_value, Some(v(json!(3))));
    assert_eq!(added.left_value, None);
}

#[test]
fn test_array_shrink_emits_removed_tail() {
    let records = d(json!([1, 2, 3]), json!([1]));
    let kinds: Vec<DiffKind> = records.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        [DiffKind::Unchanged, DiffKind::Removed, DiffKind::Removed]
    );
    assert_eq!(records[1].path, "[1]");
    assert_eq!(records[2].path, "[2]");
}

#[test]
fn test_root_primitives() {
    let records = d(json!(1), json!(2));
    assert_eq!(
        records,
        [DiffRecord::modified("".to_string(), v(json!(1)), v(json!(2)))]
    );

    let records = d(json!("x"), json!("x"));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind, DiffKind::Unchanged);
    assert_eq!(records[0].path, "");
    assert_eq!(records[0].left_value, Some(v(json!("x"))));
    assert_eq!(records[0].right_value, Some(v(json!("x"))));

    let records = d(json!(null), json!(null));
    assert_eq!(records[0].kind, DiffKind::Unchanged);
}

#[test]
fn test_mismatched_container_kinds_are_one_modification() {
    let records = d(json!({"a": [1, 2]}), json!({"a": {"x": 1}}));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].path, "a");
    assert_eq!(records[0].kind, DiffKind::Modified);
    assert!(records[0].left_value.is_some());
    assert!(records[0].right_value.is_some());
}

#[test]
fn test_primitive_against_container_degrades_to_modified() {
    let records = d(json!({"a": 1}), json!({"a": {"x": 1}}));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind, DiffKind::Modified);

    let records = d(json!([1]), json!(1));
    assert_eq!(
        records,
        [DiffRecord::modified("".to_string(), v(json!([1])), v(json!(1)))]
    );
}

#[test]
fn test_nested_paths_compose() {
    let records = d(
        json!({"user": {"tags": ["a", "b"]}}),
        json!({"user": {"tags": ["a", "c"]}}),
    );
    let changed = records
        .iter()
        .find(|r| r.kind == DiffKind::Modified)
        .unwrap();
    assert_eq!(changed.path, "user.tags[1]");

    let records = d(
        json!({"rows": [{"id": 1}]}),
        json!({"rows": [{"id": 2}]}),
    );
    assert_eq!(records[0].path, "rows[0].id");
}

#[test]
fn test_record_order_is_left_then_right_union() {
    let records = d(json!({"a": 1, "c": 3}), json!({"b": 2, "a": 1}));
    let summary: Vec<(&str, DiffKind)> = records
        .iter()
        .map(|r| (r.path.as_str(), r.kind))
        .collect();
    assert_eq!(
        summary,
        [
            ("a", DiffKind::Unchanged),
            ("c", DiffKind::Removed),
            ("b", DiffKind::Added),
        ]
    );
}

#[test]
fn test_numbers_compare_numerically_across_representations() {
    let records = d(json!({"n": 1}), json!({"n": 1.0}));
    assert_eq!(records[0].kind, DiffKind::Unchanged);

    let records = d(json!({"n": 1}), json!({"n": 1.5}));
    assert_eq!(records[0].kind, DiffKind::Modified);
}

#[test]
fn test_base_path_prefixes_every_record() {
    let options = DiffOptions {
        base_path: "payload".to_string(),
        ..DiffOptions::default()
    };
    let records = diff_with(
        &v(json!({"a": [1]})),
        &v(json!({"a": [2]})),
        &options,
    )
    .unwrap();
    assert_eq!(records[0].path, "payload.a[0]");
}

#[test]
fn test_depth_limit() {
    let options = DiffOptions {
        max_depth: 2,
        ..DiffOptions::default()
    };
    let deep = json!({"a": {"b": {"c": 1}}});
    let err = diff_with(&v(deep.clone()), &v(deep), &options).unwrap_err();
    assert_eq!(err.limit, 2);
}

#[test]
fn test_record_to_json() {
    let records = d(json!({"a": 1}), json!({"a": 2}));
    assert_eq!(
        records[0].to_json().unwrap(),
        json!({"path": "a", "kind": "modified", "leftValue": 1, "rightValue": 2})
    );
}
