// Google Cloud Natural Language client (REST, no SDK)

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use ticketflow_types::Sentiment;

use crate::traits::SentimentAnalyzer;

pub const GOOGLE_LANGUAGE_API_BASE: &str = "https://language.googleapis.com/v1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Sentiment analysis through `documents:analyzeSentiment`
#[derive(Debug)]
pub struct GoogleLanguageClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl GoogleLanguageClient {
    pub fn builder() -> GoogleLanguageClientBuilder {
        GoogleLanguageClientBuilder::default()
    }

    fn endpoint(&self) -> String {
        format!("{}/documents:analyzeSentiment", self.base_url)
    }
}

#[async_trait]
impl SentimentAnalyzer for GoogleLanguageClient {
    async fn analyze(&self, text: &str) -> Result<Sentiment> {
        let payload = AnalyzeSentimentRequest {
            document: Document {
                doc_type: "PLAIN_TEXT",
                content: text,
            },
            encoding_type: "UTF8",
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .json(&payload)
            .send()
            .await
            .context("Failed to send analyzeSentiment request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Natural Language API error ({}): {}", status, error_text);
        }

        let body: AnalyzeSentimentResponse = response
            .json()
            .await
            .context("Failed to parse analyzeSentiment response")?;

        let sentiment = body.document_sentiment.unwrap_or_default();
        tracing::debug!(
            score = sentiment.score,
            magnitude = sentiment.magnitude,
            "Sentiment analyzed"
        );

        Ok(Sentiment::new(sentiment.score, sentiment.magnitude))
    }
}

/// Builder for GoogleLanguageClient
#[derive(Default)]
pub struct GoogleLanguageClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl GoogleLanguageClientBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API root, e.g. for a regional endpoint or a test server
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<GoogleLanguageClient> {
        let api_key = self.api_key.context("API key is required")?;
        let base_url = self
            .base_url
            .unwrap_or_else(|| GOOGLE_LANGUAGE_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&api_key).context("Invalid API key format")?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(GoogleLanguageClient {
            http_client,
            base_url,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeSentimentRequest<'a> {
    document: Document<'a>,
    encoding_type: &'static str,
}

#[derive(Debug, Serialize)]
struct Document<'a> {
    #[serde(rename = "type")]
    doc_type: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeSentimentResponse {
    document_sentiment: Option<DocumentSentiment>,
}

/// The API omits zero-valued fields
#[derive(Debug, Default, Deserialize)]
struct DocumentSentiment {
    #[serde(default)]
    score: f64,
    #[serde(default)]
    magnitude: f64,
}
