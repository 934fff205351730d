use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::Config;
use crate::models::AnalysisResult;
use crate::provider::{AnalysisProvider, AnalyzeRequest};

/// Posts `{symbol, amount}` to the analysis service and decodes its reply.
pub struct HttpAnalysisProvider {
    client: Client,
    url: String,
}

impl HttpAnalysisProvider {
    pub fn new(cfg: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: cfg.analyzer_url.clone(),
        })
    }
}

#[async_trait]
impl AnalysisProvider for HttpAnalysisProvider {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult> {
        info!(symbol = %request.symbol, amount = request.amount, url = %self.url, "Requesting analysis");

        let resp = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .context("Failed to reach analysis service")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Analysis service error {}: {}", status, body);
        }

        let result: AnalysisResult = resp
            .json()
            .await
            .context("Failed to parse analysis response")?;

        debug!(
            final_signal = ?result.final_signal,
            indicators = result.confirmations.as_ref().map_or(0, |c| c.len()),
            "Analysis received"
        );

        Ok(result)
    }
}

