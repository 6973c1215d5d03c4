pub mod traits;
pub mod google;
pub mod neutral;
pub mod config;

pub use traits::SentimentAnalyzer;
pub use google::{GoogleLanguageClient, GoogleLanguageClientBuilder};
pub use neutral::NeutralAnalyzer;
pub use config::{AnalyzerFactory, SentimentConfig, SentimentProvider};
pub use ticketflow_types::Sentiment;
