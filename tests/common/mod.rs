use serde_json::{json, Value};
use signal_analyzer::models::AnalysisResult;

/// A full service response as the analysis backend emits it.
pub fn provider_response(final_signal: &str, entry: f64, sl: f64, tp: f64) -> Value {
    json!({
        "symbol": "BTCUSDT",
        "amount": 1000.0,
        "direction": final_signal,
        "entry": entry,
        "sl": sl,
        "tp": tp,
        "rr": null,
        "confirmations": {
            "RSI": {"buy": true, "sell": false},
            "MACD": {"buy": true, "sell": false},
            "Pivot Support/Resistance": {"buy": true, "sell": true},
            "Bollinger Bands": {"buy": false, "sell": false},
            "PSAR": {"buy": true, "sell": false},
            "Stoch RSI": {"buy": false, "sell": true}
        },
        "long_percent": 60.0,
        "short_percent": 20.0,
        "final_signal": final_signal
    })
}

pub fn decode(value: Value) -> AnalysisResult {
    serde_json::from_value(value).unwrap()
}
