//! The schema inference walker.

use std::collections::HashSet;
use std::rc::Rc;

use indexmap::IndexMap;

use json_shape_value::{DepthExceeded, JsonValue};

use crate::format::Format;
use crate::types::{InferOptions, JsonType, Schema};

/// Derives a JSON Schema document describing the shape of `value`.
///
/// Total over any value graph: malformed input cannot reach this function
/// (parsing rejects it beforehand) and circular references are reported as a
/// marker node rather than an error. The only failure mode is exceeding
/// `options.max_depth` on adversarially deep input.
///
/// Object schemas are closed (`additionalProperties: false`). Array `items`
/// are inferred from the first non-null element only; heterogeneous arrays
/// silently take that element's shape, and empty or all-null arrays get the
/// unconstrained `{}` items node.
///
/// # Example
///
/// ```
/// use json_shape_schema::{infer, InferOptions, JsonType};
/// use json_shape_value::JsonValue;
/// use serde_json::json;
///
/// let value = JsonValue::from(json!({"tags": ["a", "b"]}));
/// let schema = infer(&value, &InferOptions::default()).unwrap();
/// let properties = schema.properties.unwrap();
/// let tags = &properties["tags"];
/// assert_eq!(tags.ty, Some(JsonType::Array));
/// assert_eq!(tags.items.as_ref().unwrap().ty, Some(JsonType::String));
/// ```
pub fn infer(value: &JsonValue, options: &InferOptions) -> Result<Schema, DepthExceeded> {
    let mut visiting = HashSet::new();
    let mut root = walk(value, options, &mut visiting, 0)?;
    root.schema = Some(options.schema_version.uri());
    root.title = options.title.clone();
    Ok(root)
}

/// One node of the recursive descent. `visiting` holds the identities of the
/// objects currently being inferred; entries are never removed for the rest
/// of the call, so a shared subtree revisited from a sibling branch is also
/// reported as circular (conservative on diamond-shaped graphs).
fn walk(
    value: &JsonValue,
    options: &InferOptions,
    visiting: &mut HashSet<usize>,
    depth: usize,
) -> Result<Schema, DepthExceeded> {
    if depth > options.max_depth {
        return Err(DepthExceeded {
            limit: options.max_depth,
        });
    }
    let node = match value {
        JsonValue::Null | JsonValue::Bool(_) | JsonValue::Number(_) => {
            Schema::of_type(JsonType::of(value))
        }
        JsonValue::String(text) => {
            let mut node = Schema::of_type(JsonType::String);
            if options.add_format_hints {
                node.format = Format::detect(text);
            }
            node
        }
        JsonValue::Array(items) => {
            let items = items.borrow();
            let element = match items.iter().find(|item| !matches!(item, JsonValue::Null)) {
                Some(first) => walk(first, options, visiting, depth + 1)?,
                None => Schema::unconstrained(),
            };
            let mut node = Schema::of_type(JsonType::Array);
            node.items = Some(Box::new(element));
            node
        }
        JsonValue::Object(map) => {
            if !visiting.insert(Rc::as_ptr(map) as usize) {
                return Ok(Schema::circular());
            }
            let map = map.borrow();
            let mut properties = IndexMap::with_capacity(map.len());
            let mut required = Vec::new();
            for (key, child) in map.iter() {
                properties.insert(key.clone(), walk(child, options, visiting, depth + 1)?);
                if options.make_required && !matches!(child, JsonValue::Null) {
                    required.push(key.clone());
                }
            }
            let mut node = Schema::of_type(JsonType::Object);
            node.properties = Some(properties);
            if !required.is_empty() {
                node.required = Some(required);
            }
            node.additional_properties = Some(false);
            node
        }
    };
    Ok(node)
}
