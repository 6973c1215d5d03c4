use std::sync::Arc;
use ticketflow_persist::TicketStore;
use ticketflow_sentiment::SentimentAnalyzer;

use crate::config::Config;

/// Shared application state passed to all handlers
///
/// The store and sentiment clients are process-wide but hold no per-request
/// data; each request reads and writes through them independently.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn TicketStore>,
    pub sentiment: Arc<dyn SentimentAnalyzer>,
}

impl AppState {
    pub fn new(
        config: Config,
        store: Arc<dyn TicketStore>,
        sentiment: Arc<dyn SentimentAnalyzer>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store,
            sentiment,
        }
    }
}
