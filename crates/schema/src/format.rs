//! String format detection for schema inference.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// A format hint attachable to string-typed schema nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Format {
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "uri")]
    Uri,
    #[serde(rename = "uuid")]
    Uuid,
    #[serde(rename = "date-time")]
    DateTime,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "time")]
    Time,
    #[serde(rename = "ipv4")]
    Ipv4,
    #[serde(rename = "ipv6")]
    Ipv6,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Email => "email",
            Format::Uri => "uri",
            Format::Uuid => "uuid",
            Format::DateTime => "date-time",
            Format::Date => "date",
            Format::Time => "time",
            Format::Ipv4 => "ipv4",
            Format::Ipv6 => "ipv6",
        }
    }

    /// Probes `value` against the detection rules in fixed priority order
    /// (email, uri, uuid, date-time, date, time, ipv4, ipv6); the first
    /// matching rule wins.
    ///
    /// # Example
    ///
    /// ```
    /// use json_shape_schema::Format;
    ///
    /// assert_eq!(Format::detect("user@example.com"), Some(Format::Email));
    /// assert_eq!(Format::detect("2024-05-01"), Some(Format::Date));
    /// assert_eq!(Format::detect("plain text"), None);
    /// ```
    pub fn detect(value: &str) -> Option<Format> {
        patterns()
            .iter()
            .find(|(_, pattern)| pattern.is_match(value))
            .map(|(format, _)| *format)
    }
}

/// The detection table; slice order is the priority order. The patterns are
/// deliberately loose heuristics, not validators: `date-time` is anchored at
/// the start only, `uri` means an http(s) URL, and `uuid` accepts any case.
fn patterns() -> &'static [(Format, Regex); 8] {
    static PATTERNS: OnceLock<[(Format, Regex); 8]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (Format::Email, Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()),
            (Format::Uri, Regex::new(r"^https?://.+").unwrap()),
            (
                Format::Uuid,
                Regex::new(
                    r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$",
                )
                .unwrap(),
            ),
            (
                Format::DateTime,
                Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}").unwrap(),
            ),
            (Format::Date, Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap()),
            (Format::Time, Regex::new(r"^\d{2}:\d{2}:\d{2}$").unwrap()),
            (
                Format::Ipv4,
                Regex::new(
                    r"^((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
                )
                .unwrap(),
            ),
            (
                Format::Ipv6,
                Regex::new(
                    r"^(([0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}|([0-9a-fA-F]{1,4}:){1,7}:|([0-9a-fA-F]{1,4}:){1,6}:[0-9a-fA-F]{1,4})$",
                )
                .unwrap(),
            ),
        ]
    })
}
