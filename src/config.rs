use serde::{Deserialize, Serialize};

use crate::core::confirmations::PIVOT_INDICATOR;
use crate::core::risk::UndeterminedPolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Provider
    pub analyzer_url: String,
    pub request_timeout_secs: u64,
    pub replay_file: Option<String>,

    // Evaluation
    pub excluded_indicators: Vec<String>,
    pub undetermined_policy: UndeterminedPolicy,
    pub min_risk_reward: f64,

    // Logging
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analyzer_url: "http://localhost:8000/analyze".to_string(),
            request_timeout_secs: 30,
            replay_file: None,
            excluded_indicators: vec![PIVOT_INDICATOR.to_string()],
            undetermined_policy: UndeterminedPolicy::Zero,
            min_risk_reward: 1.0,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or unparseable values keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let excluded_indicators = match lookup("EXCLUDED_INDICATORS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            None => defaults.excluded_indicators,
        };

        Config {
            analyzer_url: lookup("ANALYZER_URL").unwrap_or(defaults.analyzer_url),
            request_timeout_secs: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            replay_file: lookup("REPLAY_FILE").filter(|p| !p.trim().is_empty()),
            excluded_indicators,
            undetermined_policy: lookup("UNDETERMINED_GAIN_LOSS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.undetermined_policy),
            min_risk_reward: lookup("MIN_RISK_REWARD")
                .and_then(|v| v.parse().ok())
                .filter(|v: &f64| v.is_finite())
                .unwrap_or(defaults.min_risk_reward),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = Config::from_lookup(lookup(&[]));
        assert_eq!(cfg.analyzer_url, "http://localhost:8000/analyze");
        assert_eq!(cfg.excluded_indicators, vec![PIVOT_INDICATOR.to_string()]);
        assert_eq!(cfg.undetermined_policy, UndeterminedPolicy::Zero);
        assert!((cfg.min_risk_reward - 1.0).abs() < 1e-9);
        assert!(cfg.replay_file.is_none());
    }

    #[test]
    fn overrides_and_bad_values() {
        let cfg = Config::from_lookup(lookup(&[
            ("EXCLUDED_INDICATORS", " PSAR , Stoch RSI ,"),
            ("UNDETERMINED_GAIN_LOSS", "unavailable"),
            ("REQUEST_TIMEOUT_SECS", "ten"),
            ("MIN_RISK_REWARD", "1.5"),
        ]));
        assert_eq!(cfg.excluded_indicators, vec!["PSAR", "Stoch RSI"]);
        assert_eq!(cfg.undetermined_policy, UndeterminedPolicy::Unavailable);
        assert_eq!(cfg.request_timeout_secs, 30);
        assert!((cfg.min_risk_reward - 1.5).abs() < 1e-9);
    }

    #[test]
    fn empty_exclusion_list_disables_exclusion() {
        let cfg = Config::from_lookup(lookup(&[("EXCLUDED_INDICATORS", "")]));
        assert!(cfg.excluded_indicators.is_empty());
    }
}
