use cosmic_guide::{
    advisor::Advisor,
    api::{start_server, ApiState},
    config::AppConfig,
    session::InMemorySessionStore,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;
    if config.api_key.is_none() {
        warn!("GEMINI_API_KEY not set; requests without a key get local guidance");
    }

    info!("🔮 Cosmic Guide - API Server");
    info!("📍 Port: {}", config.port);
    info!(model = %config.gemini.model, "Gemini endpoint configured");

    let state = ApiState {
        advisor: Arc::new(Advisor::new(&config.gemini)?),
        sessions: Arc::new(InMemorySessionStore::new()),
        default_api_key: config.api_key.clone(),
    };

    info!("✅ Advisor initialized");
    info!("📡 Starting API server...");

    start_server(state, config.port).await?;

    Ok(())
}
