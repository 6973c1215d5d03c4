use anyhow::Result;
use async_trait::async_trait;
use ticketflow_types::Sentiment;

/// External service that scores the polarity of a piece of text
///
/// Implementations make a single attempt per call. Callers decide what a
/// failure means; ticket creation falls back to neutral sentiment.
#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    /// Score plain text, returning score in [-1, 1] and magnitude >= 0
    async fn analyze(&self, text: &str) -> Result<Sentiment>;
}
