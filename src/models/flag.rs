use serde::Deserialize;
use serde_json::Value;

/// A confirmation flag as emitted by the analysis provider. The provider is
/// not trusted to send booleans, so every JSON shape is accepted and tagged.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum FlagValue {
    Bool(bool),
    Text(String),
    Number(f64),
    #[default]
    Other,
}

impl From<Value> for FlagValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(b) => FlagValue::Bool(b),
            Value::String(s) => FlagValue::Text(s),
            Value::Number(n) => n.as_f64().map(FlagValue::Number).unwrap_or_default(),
            Value::Null | Value::Array(_) | Value::Object(_) => FlagValue::Other,
        }
    }
}

impl From<bool> for FlagValue {
    fn from(b: bool) -> Self {
        FlagValue::Bool(b)
    }
}

impl From<&str> for FlagValue {
    fn from(s: &str) -> Self {
        FlagValue::Text(s.to_string())
    }
}

impl From<f64> for FlagValue {
    fn from(n: f64) -> Self {
        FlagValue::Number(n)
    }
}

/// Buy/sell votes of a single confirmation indicator.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Value")]
pub struct ConfirmationRecord {
    pub buy: FlagValue,
    pub sell: FlagValue,
}

impl ConfirmationRecord {
    pub fn new(buy: impl Into<FlagValue>, sell: impl Into<FlagValue>) -> Self {
        Self {
            buy: buy.into(),
            sell: sell.into(),
        }
    }
}

impl From<Value> for ConfirmationRecord {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => Self {
                buy: fields.remove("buy").map(FlagValue::from).unwrap_or_default(),
                sell: fields.remove("sell").map(FlagValue::from).unwrap_or_default(),
            },
            // A bare value carries no per-side vote.
            _ => Self::default(),
        }
    }
}
