use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::core::normalize::coerce_number;
use crate::models::ConfirmationRecord;

pub type Confirmations = BTreeMap<String, ConfirmationRecord>;

/// The analysis provider's response. Every field is optional and leniently
/// decoded: a malformed field degrades to `None` instead of failing the
/// whole record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "lenient_text")]
    pub symbol: Option<String>,
    #[serde(default, alias = "finalSignal", deserialize_with = "lenient_text")]
    pub final_signal: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub entry: Option<f64>,
    #[serde(default, alias = "stopLoss", deserialize_with = "lenient_number")]
    pub sl: Option<f64>,
    #[serde(default, alias = "takeProfit", deserialize_with = "lenient_number")]
    pub tp: Option<f64>,
    #[serde(default, deserialize_with = "lenient_confirmations")]
    pub confirmations: Option<Confirmations>,
    #[serde(default, deserialize_with = "lenient_error")]
    pub error: Option<String>,

    // Echoed by the provider; never used for derivation.
    #[serde(default, deserialize_with = "lenient_number")]
    pub long_percent: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub short_percent: Option<f64>,
}

impl AnalysisResult {
    /// The provider-reported failure, if any. Blank strings do not count.
    pub fn upstream_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.trim().is_empty())
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_error<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value))
}

fn lenient_confirmations<'de, D>(deserializer: D) -> Result<Option<Confirmations>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => Some(
            map.into_iter()
                .map(|(name, record)| (name, ConfirmationRecord::from(record)))
                .collect(),
        ),
        _ => None,
    })
}
