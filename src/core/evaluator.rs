use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;
use crate::core::confirmations::ConfirmationAggregator;
use crate::core::risk::{compute_risk, PriceLevels, UndeterminedPolicy};
use crate::models::{AnalysisResult, Direction, Evaluation, Metric};

const DEFAULT_MIN_RISK_REWARD: f64 = 1.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// The provider reported its own failure; the text is passed through as-is.
    #[error("{0}")]
    Upstream(String),
}

/// Derives decision-support metrics from a single analysis result. Holds
/// only configuration, so one evaluator can serve any number of calls.
pub struct SignalEvaluator {
    aggregator: ConfirmationAggregator,
    policy: UndeterminedPolicy,
    min_risk_reward: f64,
}

impl Default for SignalEvaluator {
    fn default() -> Self {
        Self {
            aggregator: ConfirmationAggregator::default(),
            policy: UndeterminedPolicy::default(),
            min_risk_reward: DEFAULT_MIN_RISK_REWARD,
        }
    }
}

impl SignalEvaluator {
    pub fn new(cfg: &Config) -> Self {
        Self {
            aggregator: ConfirmationAggregator::new(cfg),
            policy: cfg.undetermined_policy,
            min_risk_reward: cfg.min_risk_reward,
        }
    }

    pub fn with_policy(mut self, policy: UndeterminedPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn evaluate(
        &self,
        result: &AnalysisResult,
        amount: Option<f64>,
    ) -> Result<Evaluation, EvaluationError> {
        if let Some(err) = result.upstream_error() {
            return Err(EvaluationError::Upstream(err.to_string()));
        }

        let direction = Direction::from_signal(result.final_signal.as_deref());
        let confirmations = result.confirmations.as_ref();
        let aggregate = self.aggregator.aggregate(confirmations);
        let checklist = self.aggregator.checklist(confirmations);
        let risk = compute_risk(&PriceLevels::from_result(result), amount, direction, self.policy);

        let low_reward_warning = risk
            .ratio
            .value()
            .is_some_and(|rr| rr < self.min_risk_reward);

        check_echoed("long", result.long_percent, aggregate.long_percent);
        check_echoed("short", result.short_percent, aggregate.short_percent);

        info!(
            symbol = result.symbol.as_deref().unwrap_or("?"),
            %direction,
            long = %aggregate.long_percent,
            short = %aggregate.short_percent,
            rr = %risk.ratio,
            "Evaluated signal"
        );

        Ok(Evaluation {
            symbol: result.symbol.clone(),
            final_signal: result.final_signal.clone(),
            direction,
            entry: result.entry,
            stop_loss: result.sl,
            take_profit: result.tp,
            aggregate,
            risk,
            checklist,
            low_reward_warning,
        })
    }
}

fn check_echoed(side: &str, echoed: Option<f64>, derived: Metric) {
    if let (Some(echoed), Some(derived)) = (echoed, derived.value()) {
        if (echoed - derived).abs() > 0.05 {
            debug!(side, echoed, derived, "Provider percentage differs from recomputed value");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AggregateResult, Ratio};
    use crate::test_helpers::{analysis, confirmations};

    #[test]
    fn upstream_error_short_circuits() {
        let mut result = analysis("BUY", 100.0, 90.0, 120.0);
        result.error = Some("Symbol not found".into());
        let err = SignalEvaluator::default().evaluate(&result, Some(1000.0)).unwrap_err();
        assert_eq!(err, EvaluationError::Upstream("Symbol not found".into()));
        assert_eq!(err.to_string(), "Symbol not found");
    }

    #[test]
    fn full_buy_evaluation() {
        let mut result = analysis("buy", 100.0, 90.0, 120.0);
        result.confirmations = Some(confirmations(&[
            ("RSI", true, false),
            ("MACD", false, true),
            ("Pivot Support/Resistance", true, true),
        ]));
        let eval = SignalEvaluator::default().evaluate(&result, Some(1000.0)).unwrap();
        assert_eq!(eval.direction, Direction::Buy);
        assert_eq!(eval.aggregate.long_percent, Metric::Value(50.0));
        assert_eq!(eval.aggregate.short_percent, Metric::Value(50.0));
        assert_eq!(eval.risk.gain, Metric::Value(200.0));
        assert_eq!(eval.risk.ratio, Ratio::Value(2.0));
        assert_eq!(eval.checklist.len(), 3);
        assert!(!eval.low_reward_warning);
    }

    #[test]
    fn same_input_same_evaluation() {
        let mut result = analysis("SELL", 100.0, 110.0, 80.0);
        result.confirmations = Some(confirmations(&[("RSI", false, true), ("MACD", true, false)]));
        let evaluator = SignalEvaluator::default();
        let first = evaluator.evaluate(&result, Some(250.0)).unwrap();
        let second = evaluator.evaluate(&result, Some(250.0)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn warns_when_reward_below_risk() {
        let result = analysis("BUY", 100.0, 90.0, 105.0);
        let eval = SignalEvaluator::default().evaluate(&result, Some(1000.0)).unwrap();
        assert_eq!(eval.risk.ratio, Ratio::Value(0.5));
        assert!(eval.low_reward_warning);
    }

    #[test]
    fn hold_signal_is_undetermined() {
        let result = analysis("HOLD", 100.0, 90.0, 120.0);
        let eval = SignalEvaluator::default().evaluate(&result, Some(1000.0)).unwrap();
        assert_eq!(eval.direction, Direction::Undetermined);
        assert_eq!(eval.risk.ratio, Ratio::NotComputable);
        assert_eq!(eval.risk.gain, Metric::Value(0.0));
        assert!(!eval.low_reward_warning);
        assert_eq!(eval.aggregate, AggregateResult::unavailable());

        let strict = SignalEvaluator::default().with_policy(UndeterminedPolicy::Unavailable);
        let eval = strict.evaluate(&result, Some(1000.0)).unwrap();
        assert_eq!(eval.risk.gain, Metric::Unavailable);
    }
}
