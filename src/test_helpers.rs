use crate::models::{AnalysisResult, ConfirmationRecord, Confirmations};

/// Create an analysis result with the given signal and price levels and no confirmations.
pub fn analysis(signal: &str, entry: f64, sl: f64, tp: f64) -> AnalysisResult {
    AnalysisResult {
        symbol: Some("BTCUSDT".to_string()),
        final_signal: Some(signal.to_string()),
        entry: Some(entry),
        sl: Some(sl),
        tp: Some(tp),
        ..AnalysisResult::default()
    }
}

/// Create confirmations from (name, buy, sell) tuples.
pub fn confirmations(data: &[(&str, bool, bool)]) -> Confirmations {
    data.iter()
        .map(|&(name, buy, sell)| (name.to_string(), ConfirmationRecord::new(buy, sell)))
        .collect()
}
