//! Narrow field extraction from facilitator JSON bodies.
//!
//! This is intentionally not a JSON parser. The verify/settle decision
//! needs three or four scalar fields from a small, known response shape,
//! so a bounded linear scan for the `"key":` marker is enough.
//!
//! Guarantees:
//! - Missing key returns `None`.
//! - String values scan past `\"`-escaped characters; the raw span between
//!   the quotes is returned without unescaping.
//! - `true`/`false` and bare numbers are returned as their literal text.
//! - Whitespace between the colon and the value is skipped.
//! - Never panics on truncated input.

/// Extract the value of `key` from a flat JSON object body.
pub fn extract_field(json: &str, key: &str) -> Option<String> {
    let marker = format!("\"{key}\":");
    let start = json.find(&marker)? + marker.len();
    let rest = json.get(start..)?;
    let rest = rest.trim_start_matches([' ', '\t', '\n', '\r']);

    let first = rest.chars().next()?;
    match first {
        '"' => {
            let bytes = rest.as_bytes();
            let mut i = 1;
            while i < bytes.len() && bytes[i] != b'"' {
                if bytes[i] == b'\\' {
                    i += 2; // skip the escaped character
                } else {
                    i += 1;
                }
            }
            // Unterminated string: return what we have (tolerant, not an error).
            rest.get(1..i.min(bytes.len())).map(str::to_owned)
        }
        't' if rest.starts_with("true") => Some("true".to_owned()),
        'f' if rest.starts_with("false") => Some("false".to_owned()),
        't' | 'f' => None,
        _ => {
            let end = rest
                .find([',', '}', ']', ' ', '\t', '\n', '\r'])
                .unwrap_or(rest.len());
            rest.get(..end).map(str::to_owned)
        }
    }
}

/// True when the field exists and is literally `true`.
pub fn field_is_true(json: &str, key: &str) -> bool {
    extract_field(json, key).as_deref() == Some("true")
}

/// Escape a device-configured string for embedding in a hand-assembled
/// JSON reply.
pub fn escape_json(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}
