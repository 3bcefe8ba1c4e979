//! Field-extractor contract tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use x4pay_core::protocol::extract::{escape_json, extract_field, field_is_true};

#[test]
fn missing_key_returns_none() {
    assert_eq!(extract_field("{\"isValid\":true}", "transaction"), None);
    assert_eq!(extract_field("", "transaction"), None);
}

#[test]
fn string_value_extracted() {
    let body = "{\"success\":true,\"transaction\":\"0xabc\",\"payer\":\"0x1\"}";
    assert_eq!(extract_field(body, "transaction").unwrap(), "0xabc");
    assert_eq!(extract_field(body, "payer").unwrap(), "0x1");
}

#[test]
fn escaped_quotes_are_scanned_past() {
    let body = r#"{"invalidReason":"bad \"sig\" here","isValid":false}"#;
    assert_eq!(
        extract_field(body, "invalidReason").unwrap(),
        r#"bad \"sig\" here"#
    );
    assert_eq!(extract_field(body, "isValid").unwrap(), "false");
}

#[test]
fn booleans_and_numbers_are_literal_text() {
    let body = "{\"isValid\": true, \"x402Version\": 1, \"ok\":false}";
    assert_eq!(extract_field(body, "isValid").unwrap(), "true");
    assert_eq!(extract_field(body, "x402Version").unwrap(), "1");
    assert_eq!(extract_field(body, "ok").unwrap(), "false");
    assert!(field_is_true(body, "isValid"));
    assert!(!field_is_true(body, "ok"));
    assert!(!field_is_true(body, "absent"));
}

#[test]
fn truncated_string_is_tolerated() {
    assert_eq!(extract_field("{\"payer\":\"0xdead", "payer").unwrap(), "0xdead");
}

#[test]
fn escape_json_covers_control_characters() {
    assert_eq!(escape_json("a\"b\\c\nd"), "a\\\"b\\\\c\\nd");
    assert_eq!(escape_json("plain"), "plain");
}
