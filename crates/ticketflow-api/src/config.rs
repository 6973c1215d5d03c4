use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;
use ticketflow_sentiment::{SentimentConfig, SentimentProvider};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub mongodb: MongoDbConfig,
    #[serde(default)]
    pub sentiment: SentimentConfig,
    pub logging: LoggingConfig,

    // Secrets (from ENV only)
    #[serde(default)]
    pub mongodb_uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub enabled: bool,
    pub origins: Vec<String>,
    #[serde(default = "default_cors_max_age")]
    pub max_age_secs: u64,
}

fn default_cors_max_age() -> u64 {
    3600
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Mongodb,
    /// Process-local, lost on restart
    Memory,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoDbConfig {
    pub database: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    pub timeout_ms: u64,
}

fn default_collection() -> String {
    "tickets".to_string()
}

impl Default for MongoDbConfig {
    fn default() -> Self {
        Self {
            database: "ticketflow".to_string(),
            collection: default_collection(),
            timeout_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (if ENV is set)
    /// 3. TICKETFLOW_ environment variables, `__` between levels
    ///    (e.g. TICKETFLOW_SERVER__PORT=9000)
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

        let builder = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("TICKETFLOW")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;

        let mut cfg: Config = config.try_deserialize()?;
        cfg.apply_secrets()?;

        Ok(cfg)
    }

    /// Pull secrets from ENV (never from TOML)
    fn apply_secrets(&mut self) -> Result<(), ConfigError> {
        if self.store.backend == StoreBackend::Mongodb {
            self.mongodb_uri = std::env::var("MONGODB_URI").map_err(|_| {
                ConfigError::Message("MONGODB_URI environment variable is required".to_string())
            })?;
        }

        if let Ok(api_key) = std::env::var("SENTIMENT_API_KEY") {
            self.sentiment.api_key = Some(api_key);
        }
        if self.sentiment.provider == SentimentProvider::Google && self.sentiment.api_key.is_none() {
            return Err(ConfigError::Message(
                "SENTIMENT_API_KEY environment variable is required for the google provider"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
        [server]
        host = "127.0.0.1"
        port = 3000

        [cors]
        enabled = true
        origins = ["http://localhost:3000"]

        [store]
        backend = "memory"

        [mongodb]
        database = "test"
        timeout_ms = 3000

        [sentiment]
        provider = "disabled"
        timeout_ms = 2000

        [logging]
        level = "debug"
        format = "json"
    "#;

    #[test]
    fn test_config_structure() {
        let config: Config = toml::from_str(FULL).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.request_timeout_secs, 30);
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.mongodb.database, "test");
        assert_eq!(config.mongodb.collection, "tickets");
        assert_eq!(config.sentiment.provider, SentimentProvider::Disabled);
        assert_eq!(config.sentiment.timeout_ms, 2000);
        assert_eq!(config.cors.max_age_secs, 3600);
    }

    #[test]
    fn test_optional_sections_default() {
        let toml = r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [cors]
            enabled = true
            origins = ["*"]

            [logging]
            level = "info"
            format = "pretty"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.store.backend, StoreBackend::Mongodb);
        assert_eq!(config.mongodb.database, "ticketflow");
        assert_eq!(config.sentiment.provider, SentimentProvider::Google);
        assert!(config.mongodb_uri.is_empty());
    }
}
