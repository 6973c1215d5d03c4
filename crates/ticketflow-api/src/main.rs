use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ticketflow_api::{
    build_router,
    config::{Config, StoreBackend},
    state::AppState,
};
use ticketflow_persist::{InMemoryTicketStore, TicketStore};
use ticketflow_sentiment::AnalyzerFactory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    init_logging(&config);

    tracing::info!("Starting Ticketflow API server");
    tracing::info!("Config loaded: {}:{}", config.server.host, config.server.port);

    let store = init_store(&config).await?;

    tracing::info!("Initializing sentiment analyzer ({:?})", config.sentiment.provider);
    let sentiment = AnalyzerFactory::create(&config.sentiment)?;

    let state = Arc::new(AppState::new(config.clone(), store, sentiment));
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("API docs: http://{}/api/docs", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn init_store(config: &Config) -> anyhow::Result<Arc<dyn TicketStore>> {
    match config.store.backend {
        StoreBackend::Mongodb => connect_mongodb(config).await,
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory ticket store, tickets are lost on restart");
            Ok(Arc::new(InMemoryTicketStore::new()))
        }
    }
}

#[cfg(feature = "mongodb")]
async fn connect_mongodb(config: &Config) -> anyhow::Result<Arc<dyn TicketStore>> {
    use std::time::Duration;
    use ticketflow_persist::MongoTicketStore;

    tracing::info!("Connecting to MongoDB");
    let store = MongoTicketStore::connect(
        &config.mongodb_uri,
        &config.mongodb.database,
        &config.mongodb.collection,
        Duration::from_millis(config.mongodb.timeout_ms),
    )
    .await?;
    store.ping().await?;
    tracing::info!("MongoDB connected");

    Ok(Arc::new(store))
}

#[cfg(not(feature = "mongodb"))]
async fn connect_mongodb(_config: &Config) -> anyhow::Result<Arc<dyn TicketStore>> {
    anyhow::bail!("store.backend = \"mongodb\" but the binary was built without the mongodb feature")
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }
}
