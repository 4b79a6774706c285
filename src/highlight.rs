// Author: Dustin Pilgrim
// License: MIT

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// What a classified span holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Key,
    Str,
    Number,
    Bool,
    Null,
}

/// A classified run of one line. Offsets are byte positions into the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub kind: SpanKind,
}

// Strings first so digits and keywords inside them never match on their own.
static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#""(?:\\.|[^"\\])*"|-?(?:0|[1-9]\d*)(?:\.\d+)?(?:[eE][+-]?\d+)?|\btrue\b|\bfalse\b|\bnull\b"#,
    )
    .unwrap()
});

/// Classify the JSON tokens of one serialized line.
///
/// Punctuation and whitespace are left unclassified. A string counts as
/// a key when the next non-space character after it is ':'.
///
/// ```
/// use scry_json::highlight::{classify_line, SpanKind};
///
/// let spans = classify_line(r#"  "port": 8080,"#);
/// assert_eq!(spans[0].kind, SpanKind::Key);
/// assert_eq!(spans[1].kind, SpanKind::Number);
/// ```
pub fn classify_line(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();

    for m in TOKEN.find_iter(line) {
        let kind = match m.as_str() {
            "true" | "false" => SpanKind::Bool,
            "null" => SpanKind::Null,
            text if text.starts_with('"') => {
                if line[m.end()..].trim_start().starts_with(':') {
                    SpanKind::Key
                } else {
                    SpanKind::Str
                }
            }
            _ => SpanKind::Number,
        };
        spans.push(Span {
            start: m.start(),
            end: m.end(),
            kind,
        });
    }

    spans
}
