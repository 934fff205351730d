pub mod http;
pub mod replay;

pub use http::HttpAnalysisProvider;
pub use replay::ReplayProvider;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::AnalysisResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub symbol: String,
    pub amount: f64,
}

impl AnalyzeRequest {
    pub fn new(symbol: &str, amount: f64) -> Self {
        Self {
            symbol: symbol.trim().to_uppercase(),
            amount,
        }
    }
}

/// Source of analysis results. Implementations do not retry; a failed
/// request is reported once to the caller.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_symbol_is_uppercased() {
        let req = AnalyzeRequest::new(" btcusdt ", 250.0);
        assert_eq!(req.symbol, "BTCUSDT");
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body, serde_json::json!({"symbol": "BTCUSDT", "amount": 250.0}));
    }
}
