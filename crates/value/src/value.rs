//! The `JsonValue` tagged union and conversions to and from
//! `serde_json::Value`.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::{Number, Value};

use crate::error::CycleError;

/// Insertion-ordered map backing [`JsonValue::Object`].
pub type JsonObject = IndexMap<String, JsonValue>;

/// Element sequence backing [`JsonValue::Array`].
pub type JsonArray = Vec<JsonValue>;

/// A JSON value: one of the six JSON kinds, exhaustively matchable.
///
/// Containers are `Rc<RefCell<…>>` cells, so a value is a *graph*, not just a
/// tree: two fields may point at the same object, and an object may
/// (transitively) contain itself. Cloning is shallow for containers, which
/// gives the reference semantics the engines expect. Object key insertion
/// order is preserved but carries no meaning.
///
/// `PartialEq` is deep structural equality and is only meaningful for finite
/// trees; comparing cyclic graphs does not terminate. For the reference-aware
/// equality used by the diff engine see [`crate::strict_equal`].
///
/// # Example
///
/// ```
/// use json_shape_value::JsonValue;
/// use serde_json::json;
///
/// let value = JsonValue::from(json!({"a": [1, 2]}));
/// assert_eq!(value.to_value().unwrap(), json!({"a": [1, 2]}));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Rc<RefCell<JsonArray>>),
    Object(Rc<RefCell<JsonObject>>),
}

impl JsonValue {
    /// Creates an empty object value.
    pub fn new_object() -> JsonValue {
        JsonValue::Object(Rc::new(RefCell::new(JsonObject::new())))
    }

    /// Creates an empty array value.
    pub fn new_array() -> JsonValue {
        JsonValue::Array(Rc::new(RefCell::new(JsonArray::new())))
    }

    /// Returns `true` for arrays and objects.
    pub fn is_container(&self) -> bool {
        matches!(self, JsonValue::Array(_) | JsonValue::Object(_))
    }

    /// Converts this value back into a plain `serde_json::Value` tree.
    ///
    /// Shared (diamond-shaped) references convert fine and are duplicated in
    /// the output; a cyclic graph fails with [`CycleError`], since the target
    /// type cannot represent it.
    ///
    /// # Example
    ///
    /// ```
    /// use json_shape_value::JsonValue;
    ///
    /// let obj = JsonValue::new_object();
    /// if let JsonValue::Object(map) = &obj {
    ///     map.borrow_mut().insert("me".to_string(), obj.clone());
    /// }
    /// assert!(obj.to_value().is_err());
    /// ```
    pub fn to_value(&self) -> Result<Value, CycleError> {
        let mut visiting = HashSet::new();
        convert(self, &mut visiting)
    }
}

/// Recursive conversion; `visiting` holds the container identities on the
/// current descent path and is popped on backtrack, so only true cycles fail.
fn convert(value: &JsonValue, visiting: &mut HashSet<usize>) -> Result<Value, CycleError> {
    match value {
        JsonValue::Null => Ok(Value::Null),
        JsonValue::Bool(b) => Ok(Value::Bool(*b)),
        JsonValue::Number(n) => Ok(Value::Number(n.clone())),
        JsonValue::String(s) => Ok(Value::String(s.clone())),
        JsonValue::Array(items) => {
            let addr = Rc::as_ptr(items) as usize;
            if !visiting.insert(addr) {
                return Err(CycleError);
            }
            let src = items.borrow();
            let mut out = Vec::with_capacity(src.len());
            for item in src.iter() {
                out.push(convert(item, visiting)?);
            }
            drop(src);
            visiting.remove(&addr);
            Ok(Value::Array(out))
        }
        JsonValue::Object(map) => {
            let addr = Rc::as_ptr(map) as usize;
            if !visiting.insert(addr) {
                return Err(CycleError);
            }
            let src = map.borrow();
            let mut out = serde_json::Map::new();
            for (key, child) in src.iter() {
                out.insert(key.clone(), convert(child, visiting)?);
            }
            drop(src);
            visiting.remove(&addr);
            Ok(Value::Object(out))
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> JsonValue {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(n) => JsonValue::Number(n),
            Value::String(s) => JsonValue::String(s),
            Value::Array(items) => JsonValue::Array(Rc::new(RefCell::new(
                items.into_iter().map(JsonValue::from).collect(),
            ))),
            Value::Object(map) => JsonValue::Object(Rc::new(RefCell::new(
                map.into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip_preserves_key_order() {
        let source = json!({"z": 1, "a": {"m": [true, null]}, "k": 2.5});
        let value = JsonValue::from(source.clone());
        assert_eq!(value.to_value().unwrap(), source);
    }

    #[test]
    fn test_clone_is_shallow_for_containers() {
        let value = JsonValue::from(json!({"a": 1}));
        let alias = value.clone();
        if let (JsonValue::Object(a), JsonValue::Object(b)) = (&value, &alias) {
            assert!(Rc::ptr_eq(a, b));
        } else {
            panic!("expected objects");
        }
    }

    #[test]
    fn test_cyclic_array_fails_conversion() {
        let arr = JsonValue::new_array();
        if let JsonValue::Array(items) = &arr {
            items.borrow_mut().push(arr.clone());
        }
        assert_eq!(arr.to_value(), Err(CycleError));
    }

    #[test]
    fn test_shared_subtree_converts() {
        let shared = JsonValue::from(json!({"x": 1}));
        let root = JsonValue::new_object();
        if let JsonValue::Object(map) = &root {
            map.borrow_mut().insert("a".to_string(), shared.clone());
            map.borrow_mut().insert("b".to_string(), shared);
        }
        assert_eq!(
            root.to_value().unwrap(),
            json!({"a": {"x": 1}, "b": {"x": 1}})
        );
    }
}
