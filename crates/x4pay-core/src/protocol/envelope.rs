//! Assembled envelope formats.
//!
//! Payment channel: `<paymentJSON>--<customContext>--[opt1,opt2,...]`
//! Price channel:   `<customContext>--[opt1,opt2,...]`
//!
//! Malformed input never errors here: missing separators fall back to
//! empty/default fields so a bad client cannot wedge the control path.

use crate::protocol::extract::extract_field;

const SEPARATOR: &str = "--";

/// Parsed payment envelope. Created once per completed assembly and
/// consumed by the router; never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentEnvelope {
    /// The signed payment object, opaque to this layer.
    pub payload_json: String,
    pub custom_context: String,
    pub selected_options: Vec<String>,
}

impl PaymentEnvelope {
    pub fn parse(combined: &str) -> Self {
        let Some(first) = combined.find(SEPARATOR) else {
            // No separators: the whole message is the payment JSON.
            return Self {
                payload_json: combined.to_owned(),
                custom_context: String::new(),
                selected_options: Vec::new(),
            };
        };
        let after_first = first + SEPARATOR.len();
        let Some(second_rel) = combined[after_first..].find(SEPARATOR) else {
            return Self {
                payload_json: combined.to_owned(),
                custom_context: String::new(),
                selected_options: Vec::new(),
            };
        };
        let second = after_first + second_rel;

        Self {
            payload_json: combined[..first].to_owned(),
            custom_context: normalize_context(&combined[after_first..second]),
            selected_options: parse_options(&combined[second + SEPARATOR.len()..]),
        }
    }
}

/// Parsed price-query envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceEnvelope {
    pub custom_context: String,
    pub selected_options: Vec<String>,
}

impl PriceEnvelope {
    pub fn parse(combined: &str) -> Self {
        match combined.find(SEPARATOR) {
            Some(first) => Self {
                custom_context: normalize_context(&combined[..first]),
                selected_options: parse_options(&combined[first + SEPARATOR.len()..]),
            },
            None => Self {
                custom_context: String::new(),
                selected_options: Vec::new(),
            },
        }
    }
}

/// The unit handed to the verification worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentPayload {
    /// Protocol version, `"1"` when absent from the payment JSON.
    pub x402_version: String,
    /// The entire signed payment object, passed through untouched.
    pub payload_json: String,
}

impl PaymentPayload {
    pub fn from_json(payment_json: &str) -> Self {
        let x402_version = match extract_field(payment_json, "x402Version") {
            Some(v) if !v.is_empty() => v,
            _ => "1".to_owned(),
        };
        Self {
            x402_version,
            payload_json: payment_json.to_owned(),
        }
    }
}

/// An empty-quoted context (`""`) means "none" on the wire.
fn normalize_context(ctx: &str) -> String {
    if ctx == "\"\"" {
        String::new()
    } else {
        ctx.to_owned()
    }
}

/// Options arrive as `[a, b, c]`: bracketed, comma-separated, whitespace
/// trimmed. Blank items are dropped; anything unbracketed yields an empty
/// list.
fn parse_options(part: &str) -> Vec<String> {
    let Some(inner) = part
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        return Vec::new();
    };
    inner
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
