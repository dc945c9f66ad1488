//! The lock-step structural diff walk.

use json_shape_value::{strict_equal, DepthExceeded, JsonValue};

use crate::path::{append_index, append_key};
use crate::types::{DiffOptions, DiffRecord};

/// Computes the full delta between `left` and `right`.
///
/// One record per compared path, including `unchanged` ones; consumers that
/// only want changes filter afterwards. Total over any pair of values: a
/// primitive against a container, or an array against an object, degrades to
/// a single `modified` record at that path rather than an error. The only
/// failure mode is exceeding the depth ceiling on adversarially deep input.
///
/// # Example
///
/// ```
/// use json_shape_diff::{diff, DiffKind};
/// use json_shape_value::JsonValue;
/// use serde_json::json;
///
/// let left = JsonValue::from(json!({"items": [1, 2]}));
/// let right = JsonValue::from(json!({"items": [1, 2, 3]}));
///
/// let records = diff(&left, &right).unwrap();
/// let grown = records.iter().find(|r| r.kind == DiffKind::Added).unwrap();
/// assert_eq!(grown.path, "items[2]");
/// ```
pub fn diff(left: &JsonValue, right: &JsonValue) -> Result<Vec<DiffRecord>, DepthExceeded> {
    diff_with(left, right, &DiffOptions::default())
}

/// [`diff`] with an explicit path prefix and depth ceiling.
pub fn diff_with(
    left: &JsonValue,
    right: &JsonValue,
    options: &DiffOptions,
) -> Result<Vec<DiffRecord>, DepthExceeded> {
    let mut records = Vec::new();
    walk(
        left,
        right,
        &options.base_path,
        options.max_depth,
        0,
        &mut records,
    )?;
    Ok(records)
}

fn walk(
    left: &JsonValue,
    right: &JsonValue,
    path: &str,
    max_depth: usize,
    depth: usize,
    out: &mut Vec<DiffRecord>,
) -> Result<(), DepthExceeded> {
    if depth > max_depth {
        return Err(DepthExceeded { limit: max_depth });
    }
    match (left, right) {
        (JsonValue::Array(l), JsonValue::Array(r)) => {
            let l = l.borrow();
            let r = r.borrow();
            for i in 0..l.len().max(r.len()) {
                let item_path = append_index(path, i);
                if i >= l.len() {
                    out.push(DiffRecord::added(item_path, r[i].clone()));
                } else if i >= r.len() {
                    out.push(DiffRecord::removed(item_path, l[i].clone()));
                } else {
                    walk(&l[i], &r[i], &item_path, max_depth, depth + 1, out)?;
                }
            }
        }
        (JsonValue::Object(l), JsonValue::Object(r)) => {
            let l = l.borrow();
            let r = r.borrow();
            // Key union in left-then-right insertion order: left keys first
            // (recursed or removed), then keys only the right side has.
            for (key, left_child) in l.iter() {
                let child_path = append_key(path, key);
                match r.get(key) {
                    Some(right_child) => {
                        walk(left_child, right_child, &child_path, max_depth, depth + 1, out)?
                    }
                    None => out.push(DiffRecord::removed(child_path, left_child.clone())),
                }
            }
            for (key, right_child) in r.iter() {
                if !l.contains_key(key) {
                    out.push(DiffRecord::added(append_key(path, key), right_child.clone()));
                }
            }
        }
        // Primitives, and containers of mismatched kinds.
        _ => {
            if strict_equal(left, right) {
                out.push(DiffRecord::unchanged(
                    path.to_string(),
                    left.clone(),
                    right.clone(),
                ));
            } else {
                out.push(DiffRecord::modified(
                    path.to_string(),
                    left.clone(),
                    right.clone(),
                ));
            }
        }
    }
    Ok(())
}
