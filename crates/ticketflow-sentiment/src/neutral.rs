use anyhow::Result;
use async_trait::async_trait;
use ticketflow_types::Sentiment;

use crate::traits::SentimentAnalyzer;

/// Analyzer for deployments without a sentiment backend.
/// Every ticket lands in the medium priority band.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeutralAnalyzer;

#[async_trait]
impl SentimentAnalyzer for NeutralAnalyzer {
    async fn analyze(&self, _text: &str) -> Result<Sentiment> {
        Ok(Sentiment::neutral())
    }
}
