use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use crate::models::AnalysisResult;
use crate::provider::{AnalysisProvider, AnalyzeRequest};

/// Serves canned analysis results instead of calling the service.
/// Results loaded per symbol take precedence over the catch-all response.
#[derive(Default)]
pub struct ReplayProvider {
    results: HashMap<String, AnalysisResult>,
    fallback: Option<AnalysisResult>,
}

impl ReplayProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, symbol: &str, result: AnalysisResult) {
        self.results.insert(symbol.trim().to_uppercase(), result);
    }

    pub fn with_fallback(mut self, result: AnalysisResult) -> Self {
        self.fallback = Some(result);
        self
    }

    /// Load a saved service response. It is replayed for every symbol.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay file {}", path.display()))?;
        let result: AnalysisResult = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse replay file {}", path.display()))?;
        info!(path = %path.display(), "Loaded replay response");
        Ok(Self::new().with_fallback(result))
    }
}

#[async_trait]
impl AnalysisProvider for ReplayProvider {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult> {
        self.results
            .get(&request.symbol)
            .or(self.fallback.as_ref())
            .cloned()
            .with_context(|| format!("No replay data for {}", request.symbol))
    }
}
