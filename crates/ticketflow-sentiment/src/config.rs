// Provider-agnostic construction of sentiment analyzers from configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::google::GoogleLanguageClient;
use crate::neutral::NeutralAnalyzer;
use crate::traits::SentimentAnalyzer;

/// Which sentiment backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SentimentProvider {
    #[default]
    Google,
    /// No external call; every ticket scores neutral
    Disabled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentConfig {
    #[serde(default)]
    pub provider: SentimentProvider,
    /// Secret, normally injected from the environment
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            provider: SentimentProvider::default(),
            api_key: None,
            base_url: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl SentimentConfig {
    pub fn google(api_key: impl Into<String>) -> Self {
        Self {
            provider: SentimentProvider::Google,
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn disabled() -> Self {
        Self {
            provider: SentimentProvider::Disabled,
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// Factory for sentiment analyzers
pub struct AnalyzerFactory;

impl AnalyzerFactory {
    pub fn create(config: &SentimentConfig) -> Result<Arc<dyn SentimentAnalyzer>> {
        match config.provider {
            SentimentProvider::Google => {
                let api_key = config
                    .api_key
                    .clone()
                    .context("SENTIMENT_API_KEY is required for the google provider")?;

                let mut builder = GoogleLanguageClient::builder()
                    .api_key(api_key)
                    .timeout(Duration::from_millis(config.timeout_ms));
                if let Some(base_url) = &config.base_url {
                    builder = builder.base_url(base_url);
                }

                Ok(Arc::new(builder.build()?))
            }
            SentimentProvider::Disabled => {
                tracing::warn!("Sentiment analysis disabled, all tickets will score neutral");
                Ok(Arc::new(NeutralAnalyzer))
            }
        }
    }
}
