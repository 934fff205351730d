use serde_json::Value;

use crate::models::FlagValue;

/// Collapse a provider flag to a strict boolean. Total: unknown shapes are
/// `false`, never an error.
pub fn normalize_flag(value: &FlagValue) -> bool {
    match value {
        FlagValue::Bool(b) => *b,
        FlagValue::Text(s) => s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("yes"),
        // NaN compares unequal to zero and therefore counts as set.
        FlagValue::Number(n) => *n != 0.0,
        FlagValue::Other => false,
    }
}

/// Numeric coercion for price levels: JSON numbers and numeric strings are
/// accepted, everything else (including non-finite results) is `None`.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_amount(s),
        _ => None,
    }
}

/// Parse free text typed by a user (or sent by the provider) as a number.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Round to one decimal place, half away from zero.
pub fn round1(x: f64) -> f64 {
    round_to(x, 10.0)
}

/// Round to two decimal places, half away from zero.
pub fn round2(x: f64) -> f64 {
    round_to(x, 100.0)
}

// Values too large to scale are already coarser than the requested precision.
fn round_to(x: f64, scale: f64) -> f64 {
    let scaled = x * scale;
    if scaled.is_finite() {
        scaled.round() / scale
    } else {
        x
    }
}
