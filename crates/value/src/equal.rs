//! Strict equality over [`JsonValue`].

use std::rc::Rc;

use serde_json::Number;

use crate::value::JsonValue;

/// Strict equality: primitives by value, containers by reference identity.
///
/// This is the comparison the diff engine applies when at least one side is
/// not a container: two numbers are equal when they are numerically equal
/// regardless of integer/float representation, two containers are equal only
/// when they are the *same* container, and values of different kinds are
/// never equal.
///
/// # Example
///
/// ```
/// use json_shape_value::{strict_equal, JsonValue};
/// use serde_json::json;
///
/// let int = JsonValue::from(json!(1));
/// let float = JsonValue::from(json!(1.0));
/// assert!(strict_equal(&int, &float));
///
/// let a = JsonValue::from(json!({"x": 1}));
/// let b = JsonValue::from(json!({"x": 1}));
/// assert!(!strict_equal(&a, &b));
/// assert!(strict_equal(&a, &a.clone()));
/// ```
pub fn strict_equal(a: &JsonValue, b: &JsonValue) -> bool {
    match (a, b) {
        (JsonValue::Null, JsonValue::Null) => true,
        (JsonValue::Bool(a), JsonValue::Bool(b)) => a == b,
        (JsonValue::Number(a), JsonValue::Number(b)) => number_eq(a, b),
        (JsonValue::String(a), JsonValue::String(b)) => a == b,
        (JsonValue::Array(a), JsonValue::Array(b)) => Rc::ptr_eq(a, b),
        (JsonValue::Object(a), JsonValue::Object(b)) => Rc::ptr_eq(a, b),
        // Mismatched kinds are never equal
        _ => false,
    }
}

/// Numeric comparison across representations. Exact when both sides share an
/// integer representation, falls back to f64 otherwise.
fn number_eq(a: &Number, b: &Number) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a == b;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
