use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};

use crate::core::normalize::round2;
use crate::models::{AnalysisResult, Direction, Metric, Ratio, RiskMetrics};

/// What gain/loss report when the direction is undetermined but every price
/// input is present. `Zero` keeps the historical behavior of showing a flat
/// trade; `Unavailable` refuses to project anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndeterminedPolicy {
    #[default]
    Zero,
    Unavailable,
}

impl FromStr for UndeterminedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zero" => Ok(UndeterminedPolicy::Zero),
            "unavailable" => Ok(UndeterminedPolicy::Unavailable),
            other => Err(format!("unknown undetermined policy: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceLevels {
    pub entry: Option<f64>,
    pub stop_loss: Option<f64>,
    pub take_profit: Option<f64>,
}

impl PriceLevels {
    pub fn new(entry: f64, stop_loss: f64, take_profit: f64) -> Self {
        Self {
            entry: Some(entry),
            stop_loss: Some(stop_loss),
            take_profit: Some(take_profit),
        }
    }

    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            entry: result.entry,
            stop_loss: result.sl,
            take_profit: result.tp,
        }
    }

    /// All three levels, finite, with a non-zero entry to divide by.
    fn usable(&self) -> Option<(f64, f64, f64)> {
        let finite = |v: Option<f64>| v.filter(|x| x.is_finite());
        let entry = finite(self.entry)?;
        let sl = finite(self.stop_loss)?;
        let tp = finite(self.take_profit)?;
        if entry == 0.0 {
            return None;
        }
        Some((entry, sl, tp))
    }
}

/// Projected gain and loss for `amount` of quote currency, plus the
/// risk-reward ratio. The ratio does not depend on `amount`.
pub fn compute_risk(
    levels: &PriceLevels,
    amount: Option<f64>,
    direction: Direction,
    policy: UndeterminedPolicy,
) -> RiskMetrics {
    let Some((entry, sl, tp)) = levels.usable() else {
        warn!(?levels, "Insufficient price data for risk metrics");
        return RiskMetrics::unavailable();
    };

    let ratio = risk_reward(entry, sl, tp, direction);

    let Some(amount) = amount.filter(|a| a.is_finite()) else {
        debug!("No usable amount, gain/loss unavailable");
        return RiskMetrics {
            gain: Metric::Unavailable,
            loss: Metric::Unavailable,
            ratio,
        };
    };

    let (gain, loss) = match direction {
        Direction::Buy => (
            projected((tp - entry) / entry * amount),
            projected((entry - sl) / entry * amount),
        ),
        Direction::Sell => (
            projected((entry - tp) / entry * amount),
            projected((sl - entry) / entry * amount),
        ),
        Direction::Undetermined => match policy {
            UndeterminedPolicy::Zero => (Metric::Value(0.0), Metric::Value(0.0)),
            UndeterminedPolicy::Unavailable => (Metric::Unavailable, Metric::Unavailable),
        },
    };

    RiskMetrics { gain, loss, ratio }
}

/// Overflow (huge amounts, subnormal entries) is reported as unavailable.
fn projected(x: f64) -> Metric {
    let x = round2(x);
    if x.is_finite() {
        Metric::Value(x)
    } else {
        warn!("Projected value overflowed, reporting unavailable");
        Metric::Unavailable
    }
}

fn risk_reward(entry: f64, sl: f64, tp: f64, direction: Direction) -> Ratio {
    let (risk, reward) = match direction {
        Direction::Buy => (entry - sl, tp - entry),
        Direction::Sell => (sl - entry, entry - tp),
        Direction::Undetermined => return Ratio::NotComputable,
    };
    if risk <= 0.0 {
        debug!(risk, %direction, "Non-positive risk, ratio not computable");
        return Ratio::NotComputable;
    }
    let ratio = round2(reward / risk);
    if !ratio.is_finite() {
        warn!(risk, reward, "Risk-reward overflowed, ratio not computable");
        return Ratio::NotComputable;
    }
    Ratio::Value(ratio)
}
