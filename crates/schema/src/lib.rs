//! json-shape-schema — JSON Schema inference for json-shape.
//!
//! Walks an arbitrary [`JsonValue`](json_shape_value::JsonValue) and produces
//! a JSON Schema document describing its shape: one [`Schema`] node per value
//! encountered, closed object schemas, item schemas taken from the first
//! non-null array element, optional `required` lists and string format hints,
//! and first-class handling of self-referential object graphs.
//!
//! # Example
//!
//! ```
//! use json_shape_schema::{infer, InferOptions};
//! use json_shape_value::JsonValue;
//! use serde_json::json;
//!
//! let value = JsonValue::from(json!({"id": 7, "score": 9.5}));
//! let schema = infer(&value, &InferOptions::default()).unwrap();
//! assert_eq!(
//!     serde_json::to_value(&schema).unwrap(),
//!     json!({
//!         "$schema": "https://json-schema.org/draft/2020-12/schema",
//!         "type": "object",
//!         "properties": {
//!             "id": {"type": "integer"},
//!             "score": {"type": "number"}
//!         },
//!         "additionalProperties": false
//!     })
//! );
//! ```

pub mod format;
pub mod infer;
pub mod types;

pub use format::Format;
pub use infer::infer;
pub use types::{InferOptions, JsonType, Schema, SchemaVersion, CIRCULAR_DESCRIPTION};
