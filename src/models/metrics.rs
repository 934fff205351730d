use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Direction;

/// A derived number, or the explicit marker that inputs were insufficient.
/// Serializes as a JSON number or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Metric {
    Value(f64),
    Unavailable,
}

impl Metric {
    pub fn value(&self) -> Option<f64> {
        match self {
            Metric::Value(v) => Some(*v),
            Metric::Unavailable => None,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Value(v) => write!(f, "{:.2}", v),
            Metric::Unavailable => write!(f, "-"),
        }
    }
}

/// Risk-reward ratio. `NotComputable` covers undetermined direction,
/// non-positive risk and missing price levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ratio {
    Value(f64),
    NotComputable,
}

impl Ratio {
    pub fn value(&self) -> Option<f64> {
        match self {
            Ratio::Value(v) => Some(*v),
            Ratio::NotComputable => None,
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ratio::Value(v) => write!(f, "{:.2}", v),
            Ratio::NotComputable => write!(f, "-"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub long_percent: Metric,
    pub short_percent: Metric,
}

impl AggregateResult {
    pub fn unavailable() -> Self {
        Self {
            long_percent: Metric::Unavailable,
            short_percent: Metric::Unavailable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    pub gain: Metric,
    pub loss: Metric,
    pub ratio: Ratio,
}

impl RiskMetrics {
    pub fn unavailable() -> Self {
        Self {
            gain: Metric::Unavailable,
            loss: Metric::Unavailable,
            ratio: Ratio::NotComputable,
        }
    }
}

/// One row of the per-indicator buy/sell checklist. `counted` is false for
/// indicators left out of the percentage denominators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorCheck {
    pub name: String,
    pub buy: bool,
    pub sell: bool,
    pub counted: bool,
}

/// Deterministic in its inputs: evaluating the same result twice yields equal records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub symbol: Option<String>,
    pub final_signal: Option<String>,
    pub direction: Direction,
    pub entry: Option<f64>,
    pub stop_loss: Option<f64>,
    pub take_profit: Option<f64>,
    pub aggregate: AggregateResult,
    pub risk: RiskMetrics,
    pub checklist: Vec<IndicatorCheck>,
    pub low_reward_warning: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_serialize_as_null() {
        let risk = RiskMetrics {
            gain: Metric::Value(200.0),
            loss: Metric::Unavailable,
            ratio: Ratio::NotComputable,
        };
        let json = serde_json::to_value(risk).unwrap();
        assert_eq!(json["gain"], serde_json::json!(200.0));
        assert!(json["loss"].is_null());
        assert!(json["ratio"].is_null());
    }

    #[test]
    fn sentinels_display_as_dash() {
        assert_eq!(Metric::Unavailable.to_string(), "-");
        assert_eq!(Ratio::NotComputable.to_string(), "-");
        assert_eq!(Metric::Value(-100.0).to_string(), "-100.00");
        assert_eq!(Ratio::Value(2.0).to_string(), "2.00");
    }
}
