//! Recursive key ordering, the backend of a formatter's sort-keys option.

use std::cell::RefCell;
use std::rc::Rc;

use crate::value::{JsonObject, JsonValue};

/// Returns a copy of `value` with every object's keys in ascending order.
///
/// Arrays keep their element order; primitives are returned as-is. The input
/// must be a finite tree (shared subtrees are duplicated in the output).
///
/// # Example
///
/// ```
/// use json_shape_value::{sort_keys, JsonValue};
/// use serde_json::json;
///
/// let value = JsonValue::from(json!({"b": {"z": 1, "a": 2}, "a": 3}));
/// assert_eq!(
///     serde_json::to_string(&sort_keys(&value).to_value().unwrap()).unwrap(),
///     r#"{"a":3,"b":{"a":2,"z":1}}"#
/// );
/// ```
pub fn sort_keys(value: &JsonValue) -> JsonValue {
    match value {
        JsonValue::Array(items) => JsonValue::Array(Rc::new(RefCell::new(
            items.borrow().iter().map(sort_keys).collect(),
        ))),
        JsonValue::Object(map) => {
            let src = map.borrow();
            let mut entries: Vec<(String, JsonValue)> = src
                .iter()
                .map(|(key, child)| (key.clone(), sort_keys(child)))
                .collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let sorted: JsonObject = entries.into_iter().collect();
            JsonValue::Object(Rc::new(RefCell::new(sorted)))
        }
        other => other.clone(),
    }
}
