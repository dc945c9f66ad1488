//! json-shape-value — the JSON value model shared by the json-shape engines.
//!
//! Provides [`JsonValue`], a closed tagged union over the six JSON kinds in
//! which containers are reference-counted shared cells, so that object graphs
//! with shared or self-referential nodes are representable. The schema
//! inference and structural diff engines both consume this type and nothing
//! else.
//!
//! Also home to the parsing/validation front door ([`parse_json`]), the
//! strict-equality primitive the differ builds on ([`strict_equal`]), and two
//! small tree utilities ([`json_stats`], [`sort_keys`]).
//!
//! # Example
//!
//! ```
//! use json_shape_value::{parse_json, JsonValue};
//!
//! let value = parse_json(r#"{"name": "Ada", "tags": ["a", "b"]}"#).unwrap();
//! assert!(matches!(value, JsonValue::Object(_)));
//! ```

pub mod equal;
pub mod error;
pub mod parse;
pub mod sort;
pub mod stats;
pub mod value;

pub use equal::strict_equal;
pub use error::{CycleError, DepthExceeded, ParseError};
pub use parse::parse_json;
pub use sort::sort_keys;
pub use stats::{json_stats, JsonStats};
pub use value::{JsonArray, JsonObject, JsonValue};

/// Recursion-depth ceiling applied by the engines when no explicit limit is
/// configured. Inputs nested deeper than this fail with [`DepthExceeded`]
/// instead of exhausting the call stack.
pub const DEFAULT_MAX_DEPTH: usize = 512;
