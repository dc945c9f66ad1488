//! Schema document types and inference options.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Number;

use json_shape_value::{JsonValue, DEFAULT_MAX_DEPTH};

use crate::format::Format;

/// Description attached to the marker node emitted when inference revisits
/// an object already seen on the current call.
pub const CIRCULAR_DESCRIPTION: &str = "Circular reference detected";

// ── Type classification ───────────────────────────────────────────────────

/// The seven schema kinds. Every JSON value classifies into exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JsonType {
    #[serde(rename = "null")]
    Null,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "integer")]
    Integer,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "array")]
    Array,
    #[serde(rename = "object")]
    Object,
}

impl JsonType {
    pub fn as_str(self) -> &'static str {
        match self {
            JsonType::Null => "null",
            JsonType::Boolean => "boolean",
            JsonType::Integer => "integer",
            JsonType::Number => "number",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        }
    }

    /// Classifies a value into exactly one kind. A number is an `integer`
    /// when it is numerically equal to its own floor, regardless of how it
    /// is represented.
    pub fn of(value: &JsonValue) -> JsonType {
        match value {
            JsonValue::Null => JsonType::Null,
            JsonValue::Bool(_) => JsonType::Boolean,
            JsonValue::Number(n) => {
                if is_whole(n) {
                    JsonType::Integer
                } else {
                    JsonType::Number
                }
            }
            JsonValue::String(_) => JsonType::String,
            JsonValue::Array(_) => JsonType::Array,
            JsonValue::Object(_) => JsonType::Object,
        }
    }
}

fn is_whole(n: &Number) -> bool {
    if n.is_i64() || n.is_u64() {
        return true;
    }
    n.as_f64().map(|f| f.fract() == 0.0).unwrap_or(false)
}

// ── Schema version ────────────────────────────────────────────────────────

/// JSON Schema dialect selector; controls only the top-level `$schema` URI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SchemaVersion {
    #[default]
    Draft202012,
    Draft07,
}

impl SchemaVersion {
    pub fn uri(self) -> &'static str {
        match self {
            SchemaVersion::Draft202012 => "https://json-schema.org/draft/2020-12/schema",
            SchemaVersion::Draft07 => "http://json-schema.org/draft-07/schema#",
        }
    }
}

// ── Options ───────────────────────────────────────────────────────────────

/// Knobs for [`crate::infer`]. `Default` gives the plain schema: no title,
/// no `required` lists, no format hints, draft 2020-12.
#[derive(Debug, Clone)]
pub struct InferOptions {
    /// Attached as `title` on the top-level node only.
    pub title: Option<String>,
    /// Emit `required` on object nodes, listing keys whose value is not null.
    pub make_required: bool,
    /// Probe string values against the format-detection rules.
    pub add_format_hints: bool,
    /// Dialect URI emitted on the top-level node.
    pub schema_version: SchemaVersion,
    /// Recursion ceiling; exceeding it fails with `DepthExceeded`.
    pub max_depth: usize,
}

impl Default for InferOptions {
    fn default() -> InferOptions {
        InferOptions {
            title: None,
            make_required: false,
            add_format_hints: false,
            schema_version: SchemaVersion::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

// ── Schema node ───────────────────────────────────────────────────────────

/// One node of an inferred JSON Schema document.
///
/// Absent attributes are skipped during serialization, so the unconstrained
/// node (used as `items` for empty arrays) serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schema {
    /// Dialect URI; top-level node only.
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<&'static str>,

    /// Caller-supplied title; top-level node only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<JsonType>,

    /// Format hint; string nodes only, and only when hints were requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,

    /// Only used to mark a detected circular reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Per-key child schemas; object nodes only, insertion-ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Schema>>,

    /// Keys with non-null values, in key order; only when requested and
    /// non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    /// Always `false` on inferred object nodes: inferred schemas are closed.
    #[serde(
        rename = "additionalProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<bool>,

    /// Element schema; array nodes only. Unconstrained for empty or all-null
    /// arrays.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

impl Schema {
    /// The empty, unconstrained schema; serializes as `{}`.
    pub fn unconstrained() -> Schema {
        Schema::default()
    }

    /// A schema constraining only the type.
    pub fn of_type(ty: JsonType) -> Schema {
        Schema {
            ty: Some(ty),
            ..Schema::default()
        }
    }

    /// The marker node standing in for an object already being inferred
    /// higher up the current descent path.
    pub fn circular() -> Schema {
        Schema {
            ty: Some(JsonType::Object),
            description: Some(CIRCULAR_DESCRIPTION.to_string()),
            ..Schema::default()
        }
    }
}
