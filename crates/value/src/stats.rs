//! One-pass structural statistics over a JSON document.

use crate::parse::parse_json;
use crate::value::JsonValue;

/// Counters produced by [`json_stats`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct JsonStats {
    /// Input size in bytes.
    pub size: usize,
    /// Number of objects in the tree.
    pub objects: usize,
    /// Number of arrays in the tree.
    pub arrays: usize,
    /// Total number of object keys across all objects.
    pub keys: usize,
}

/// Walks a JSON document once and counts its containers and keys.
///
/// Invalid input yields the all-zero record rather than an error; callers
/// wanting a diagnosis run [`parse_json`] themselves.
///
/// # Example
///
/// ```
/// use json_shape_value::json_stats;
///
/// let stats = json_stats(r#"{"a": [1, {"b": 2}]}"#);
/// assert_eq!(stats.objects, 2);
/// assert_eq!(stats.arrays, 1);
/// assert_eq!(stats.keys, 2);
/// ```
pub fn json_stats(input: &str) -> JsonStats {
    let value = match parse_json(input) {
        Ok(value) => value,
        Err(_) => return JsonStats::default(),
    };
    let mut stats = JsonStats {
        size: input.len(),
        ..JsonStats::default()
    };
    count(&value, &mut stats);
    stats
}

fn count(value: &JsonValue, stats: &mut JsonStats) {
    match value {
        JsonValue::Array(items) => {
            stats.arrays += 1;
            for item in items.borrow().iter() {
                count(item, stats);
            }
        }
        JsonValue::Object(map) => {
            stats.objects += 1;
            let map = map.borrow();
            stats.keys += map.len();
            for (_, child) in map.iter() {
                count(child, stats);
            }
        }
        _ => {}
    }
}
