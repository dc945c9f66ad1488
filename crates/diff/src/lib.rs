//! json-shape-diff — structural diff engine for json-shape.
//!
//! Walks two [`JsonValue`](json_shape_value::JsonValue) trees in lock-step
//! and produces one [`DiffRecord`] per compared path, each classified as
//! added, removed, modified, or unchanged. Unchanged records are part of the
//! output; filtering them is a presentation concern.
//!
//! # Example
//!
//! ```
//! use json_shape_diff::{diff, DiffKind};
//! use json_shape_value::JsonValue;
//! use serde_json::json;
//!
//! let left = JsonValue::from(json!({"a": 1}));
//! let right = JsonValue::from(json!({"a": 1, "b": 2}));
//!
//! let records = diff(&left, &right).unwrap();
//! let added: Vec<_> = records
//!     .iter()
//!     .filter(|r| r.kind == DiffKind::Added)
//!     .collect();
//! assert_eq!(added.len(), 1);
//! assert_eq!(added[0].path, "b");
//! ```

pub mod diff;
pub mod path;
pub mod types;

pub use diff::{diff, diff_with};
pub use path::{append_index, append_key};
pub use types::{DiffKind, DiffOptions, DiffRecord};
