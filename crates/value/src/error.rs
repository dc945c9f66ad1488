//! Error types shared across the json-shape crates.

use thiserror::Error;

/// Failure to turn raw text into a [`crate::JsonValue`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or whitespace-only. Surfaced as a distinct case so
    /// callers can tell "nothing entered" apart from malformed text.
    #[error("Empty input")]
    Empty,

    /// The input was not valid JSON. `line` and `column` are 1-based.
    #[error("{message}")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },
}

/// A tree walk descended past its configured nesting limit.
///
/// This is the only failure mode intrinsic to the engines: rather than
/// crashing on adversarially deep input, they stop with this error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("maximum nesting depth of {limit} exceeded")]
pub struct DepthExceeded {
    pub limit: usize,
}

/// A value graph turned out to be cyclic where a finite tree was required
/// (conversion to `serde_json::Value`).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("circular reference in value graph")]
pub struct CycleError;
