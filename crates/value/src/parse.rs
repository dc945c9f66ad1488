//! Parsing front door: raw text in, [`JsonValue`] or a structured error out.

use crate::error::ParseError;
use crate::value::JsonValue;

/// Parses raw text into a [`JsonValue`].
///
/// Empty or whitespace-only input fails with [`ParseError::Empty`] (display
/// text `"Empty input"`); malformed text fails with [`ParseError::Syntax`]
/// carrying the parser message and the 1-based line/column of the failure.
/// The engines themselves never see unparsed text, so this is the place where
/// all input validation happens.
///
/// # Example
///
/// ```
/// use json_shape_value::{parse_json, ParseError};
///
/// assert!(parse_json(r#"{"ok": true}"#).is_ok());
/// assert_eq!(parse_json("  \n ").unwrap_err().to_string(), "Empty input");
///
/// let err = parse_json("{\n  \"a\": }").unwrap_err();
/// match err {
///     ParseError::Syntax { line, .. } => assert_eq!(line, 2),
///     _ => unreachable!(),
/// }
/// ```
pub fn parse_json(input: &str) -> Result<JsonValue, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    match serde_json::from_str::<serde_json::Value>(input) {
        Ok(value) => Ok(JsonValue::from(value)),
        Err(err) => Err(ParseError::Syntax {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }),
    }
}
