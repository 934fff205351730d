use tracing::debug;

use crate::config::Config;
use crate::core::normalize::{normalize_flag, round1};
use crate::models::{AggregateResult, Confirmations, IndicatorCheck, Metric};

/// Always votes both ways, so it is left out of the agreement percentages.
pub const PIVOT_INDICATOR: &str = "Pivot Support/Resistance";

/// Turns per-indicator buy/sell votes into long/short agreement percentages.
pub struct ConfirmationAggregator {
    excluded: Vec<String>,
}

impl Default for ConfirmationAggregator {
    fn default() -> Self {
        Self::with_excluded([PIVOT_INDICATOR])
    }
}

impl ConfirmationAggregator {
    pub fn new(cfg: &Config) -> Self {
        Self::with_excluded(cfg.excluded_indicators.iter().map(String::as_str))
    }

    pub fn with_excluded<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            excluded: names.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn is_counted(&self, name: &str) -> bool {
        !self.excluded.iter().any(|e| e == name)
    }

    /// Long and short percentages share one denominator: every indicator
    /// that is not excluded. No counted indicators means both are unavailable.
    pub fn aggregate(&self, confirmations: Option<&Confirmations>) -> AggregateResult {
        let Some(confirmations) = confirmations else {
            return AggregateResult::unavailable();
        };

        let mut total = 0usize;
        let mut long_true = 0usize;
        let mut short_true = 0usize;

        for (name, record) in confirmations {
            if !self.is_counted(name) {
                continue;
            }
            total += 1;
            if normalize_flag(&record.buy) {
                long_true += 1;
            }
            if normalize_flag(&record.sell) {
                short_true += 1;
            }
        }

        if total == 0 {
            return AggregateResult::unavailable();
        }

        debug!(total, long_true, short_true, "Aggregated confirmations");

        let percent = |count: usize| Metric::Value(round1(count as f64 / total as f64 * 100.0));
        AggregateResult {
            long_percent: percent(long_true),
            short_percent: percent(short_true),
        }
    }

    /// Every indicator the provider sent, excluded ones included but marked
    /// as not counted, so the checklist and the percentages never disagree
    /// silently.
    pub fn checklist(&self, confirmations: Option<&Confirmations>) -> Vec<IndicatorCheck> {
        confirmations
            .map(|c| {
                c.iter()
                    .map(|(name, record)| IndicatorCheck {
                        name: name.clone(),
                        buy: normalize_flag(&record.buy),
                        sell: normalize_flag(&record.sell),
                        counted: self.is_counted(name),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Aggregate with the default exclusion list.
pub fn aggregate(confirmations: Option<&Confirmations>) -> AggregateResult {
    ConfirmationAggregator::default().aggregate(confirmations)
}
