//! Diff record types and options.

use serde_json::Value;

use json_shape_value::{CycleError, JsonValue, DEFAULT_MAX_DEPTH};

// ── Kind ──────────────────────────────────────────────────────────────────

/// Classification of one compared path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffKind {
    Added,
    Removed,
    Modified,
    Unchanged,
}

impl DiffKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DiffKind::Added => "added",
            DiffKind::Removed => "removed",
            DiffKind::Modified => "modified",
            DiffKind::Unchanged => "unchanged",
        }
    }
}

// ── Record ────────────────────────────────────────────────────────────────

/// One path-addressed change record.
///
/// `left_value` is present for removed/modified/unchanged records,
/// `right_value` for added/modified/unchanged. Carried values are shallow
/// clones of the compared subtrees (reference semantics for containers).
#[derive(Debug, Clone, PartialEq)]
pub struct DiffRecord {
    pub path: String,
    pub kind: DiffKind,
    pub left_value: Option<JsonValue>,
    pub right_value: Option<JsonValue>,
}

impl DiffRecord {
    pub fn added(path: String, right: JsonValue) -> DiffRecord {
        DiffRecord {
            path,
            kind: DiffKind::Added,
            left_value: None,
            right_value: Some(right),
        }
    }

    pub fn removed(path: String, left: JsonValue) -> DiffRecord {
        DiffRecord {
            path,
            kind: DiffKind::Removed,
            left_value: Some(left),
            right_value: None,
        }
    }

    pub fn modified(path: String, left: JsonValue, right: JsonValue) -> DiffRecord {
        DiffRecord {
            path,
            kind: DiffKind::Modified,
            left_value: Some(left),
            right_value: Some(right),
        }
    }

    pub fn unchanged(path: String, left: JsonValue, right: JsonValue) -> DiffRecord {
        DiffRecord {
            path,
            kind: DiffKind::Unchanged,
            left_value: Some(left),
            right_value: Some(right),
        }
    }

    /// Renders the record as a plain JSON object for downstream serializers.
    /// Fails only when a carried value is a cyclic graph.
    ///
    /// # Example
    ///
    /// ```
    /// use json_shape_diff::DiffRecord;
    /// use json_shape_value::JsonValue;
    /// use serde_json::json;
    ///
    /// let record = DiffRecord::added("b".to_string(), JsonValue::from(json!(2)));
    /// assert_eq!(
    ///     record.to_json().unwrap(),
    ///     json!({"path": "b", "kind": "added", "rightValue": 2})
    /// );
    /// ```
    pub fn to_json(&self) -> Result<Value, CycleError> {
        let mut out = serde_json::Map::new();
        out.insert("path".to_string(), Value::String(self.path.clone()));
        out.insert(
            "kind".to_string(),
            Value::String(self.kind.as_str().to_string()),
        );
        if let Some(left) = &self.left_value {
            out.insert("leftValue".to_string(), left.to_value()?);
        }
        if let Some(right) = &self.right_value {
            out.insert("rightValue".to_string(), right.to_value()?);
        }
        Ok(Value::Object(out))
    }
}

// ── Options ───────────────────────────────────────────────────────────────

/// Knobs for [`crate::diff_with`].
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Path prefix for the roots of the comparison; empty at top level.
    pub base_path: String,
    /// Recursion ceiling; exceeding it fails with `DepthExceeded`.
    pub max_depth: usize,
}

impl Default for DiffOptions {
    fn default() -> DiffOptions {
        DiffOptions {
            base_path: String::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
